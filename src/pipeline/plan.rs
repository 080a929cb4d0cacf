//! Build plan for the external tools
//!
//! Mirrors what the task-runner configuration needs: the concatenation and
//! minification descriptors, each present only when its flag is active, and
//! the ordered list of tasks to run.

use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::resources::{
    build_concat_descriptors, build_minify_descriptors, build_obfuscation_config,
    ConcatDescriptor, MinifyDescriptor, ObfuscationConfig, Resources,
};
use crate::target::BuildFlags;

/// Task run by the external task runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Concatenate each set
    Concat,
    /// Minify each concatenated bundle
    Uglify,
}

/// Part of the plan to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlanStep {
    /// Concatenation, minification and task list
    #[default]
    All,
    /// Concatenation descriptors only
    Concat,
    /// Minification descriptors only
    Minify,
    /// Obfuscator input
    Obfuscate,
}

/// Descriptors and task order for one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    /// Concatenation steps; empty when bundling is off
    pub concat: BTreeMap<String, ConcatDescriptor>,
    /// Minification steps; empty when minification is off
    pub uglify: BTreeMap<String, MinifyDescriptor>,
    /// Tasks to run, concatenation first
    pub tasks: Vec<Task>,
    /// Obfuscator input for the bundles this plan produces; empty when
    /// neither flag is on
    #[serde(skip)]
    pub obfuscation: ObfuscationConfig,
}

impl BuildPlan {
    /// Build the plan for the given effective flags
    ///
    /// ```
    /// use scriptset::config::ResourceConfig;
    /// use scriptset::pipeline::{BuildPlan, Task};
    /// use scriptset::resources::Resources;
    /// use scriptset::target::BuildFlags;
    ///
    /// let config = ResourceConfig::default().with_set("public", ["index.js"]);
    /// let resources = Resources::from_config(&config);
    ///
    /// let dev = BuildPlan::new(&resources, BuildFlags::default(), "/base");
    /// assert!(dev.concat.is_empty() && dev.tasks.is_empty());
    ///
    /// let prod = BuildPlan::new(&resources, BuildFlags::all(), "/base");
    /// assert_eq!(prod.tasks, vec![Task::Concat, Task::Uglify]);
    /// ```
    pub fn new(resources: &Resources, flags: BuildFlags, base: &str) -> Self {
        let mut tasks = Vec::new();

        let concat = if flags.bundling {
            tasks.push(Task::Concat);
            build_concat_descriptors(resources, base)
        } else {
            BTreeMap::new()
        };

        let uglify = if flags.minification {
            tasks.push(Task::Uglify);
            build_minify_descriptors(resources, base)
        } else {
            BTreeMap::new()
        };

        let obfuscation = if flags.bundling || flags.minification {
            build_obfuscation_config(resources, base, flags.minification)
        } else {
            ObfuscationConfig::default()
        };

        debug!(
            "plan for {} set(s) under '{}': {} concat, {} uglify step(s)",
            resources.len(),
            base,
            concat.len(),
            uglify.len()
        );

        Self {
            concat,
            uglify,
            tasks,
            obfuscation,
        }
    }

    /// JSON for the requested part of the plan
    ///
    /// `Obfuscate` points at the minified bundles when minification is in
    /// the plan, at the concatenated ones otherwise.
    pub fn to_json(&self, step: PlanStep) -> serde_json::Result<serde_json::Value> {
        match step {
            PlanStep::All => serde_json::to_value(self),
            PlanStep::Concat => serde_json::to_value(&self.concat),
            PlanStep::Minify => serde_json::to_value(&self.uglify),
            PlanStep::Obfuscate => serde_json::to_value(&self.obfuscation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceConfig;
    use crate::target::BuildTarget;

    fn config() -> ResourceConfig {
        ResourceConfig::default()
            .with_set("libs", ["scripts/libs/jquery.js", "scripts/libs/lodash.js"])
            .with_set("admin", Vec::<String>::new())
    }

    #[test]
    fn test_dev_plan_with_flags_off_is_empty() {
        let config = config();
        let resources = Resources::from_config(&config);
        let flags = BuildFlags::resolve(&config, BuildTarget::Dev);

        let plan = BuildPlan::new(&resources, flags, "/base");
        assert!(plan.concat.is_empty());
        assert!(plan.uglify.is_empty());
        assert!(plan.tasks.is_empty());
    }

    #[test]
    fn test_prod_plan_overrides_declared_flags() {
        let config = config();
        let resources = Resources::from_config(&config);
        let flags = BuildFlags::resolve(&config, BuildTarget::Prod);

        let plan = BuildPlan::new(&resources, flags, "/base");
        assert_eq!(plan.concat.len(), 2);
        assert_eq!(plan.uglify.len(), 2);
        assert_eq!(plan.tasks, vec![Task::Concat, Task::Uglify]);
    }

    #[test]
    fn test_bundling_only_plan() {
        let config = config().with_flags(true, false);
        let resources = Resources::from_config(&config);

        let plan = BuildPlan::new(&resources, BuildFlags::from_config(&config), "/base");
        assert_eq!(plan.tasks, vec![Task::Concat]);
        assert!(plan.uglify.is_empty());
        assert_eq!(
            plan.concat["libs"].destination,
            "/base/scripts/libs.built.js"
        );
    }

    #[test]
    fn test_plan_json_shape() {
        let resources = Resources::from_config(&config());
        let plan = BuildPlan::new(&resources, BuildFlags::all(), "/base");

        let json = plan.to_json(PlanStep::All).unwrap();
        assert_eq!(json["tasks"], serde_json::json!(["concat", "uglify"]));
        assert_eq!(
            json["concat"]["admin"],
            serde_json::json!({ "src": [], "dest": "/base/scripts/admin.built.js" })
        );
        assert_eq!(json["uglify"]["libs"]["src"], "/base/scripts/libs.built.js");
    }

    #[test]
    fn test_plan_json_single_steps() {
        let resources = Resources::from_config(&config());
        let plan = BuildPlan::new(&resources, BuildFlags::all(), "/base");

        let concat = plan.to_json(PlanStep::Concat).unwrap();
        assert!(concat.get("libs").is_some());
        assert!(concat.get("tasks").is_none());

        let minify = plan.to_json(PlanStep::Minify).unwrap();
        assert_eq!(minify["admin"]["dest"], "/base/scripts/admin.min.js");
    }

    #[test]
    fn test_obfuscate_step_follows_minification() {
        let resources = Resources::from_config(&config());

        let minified = BuildPlan::new(&resources, BuildFlags::all(), "/base")
            .to_json(PlanStep::Obfuscate)
            .unwrap();
        assert_eq!(
            minified["website"]["areas"][0],
            "/base/scripts/admin.min.js"
        );

        let built_only = BuildFlags {
            bundling: true,
            minification: false,
        };
        let built = BuildPlan::new(&resources, built_only, "/base")
            .to_json(PlanStep::Obfuscate)
            .unwrap();
        assert_eq!(built["website"]["areas"][1], "/base/scripts/libs.built.js");
    }

    #[test]
    fn test_obfuscation_areas_are_bundles_of_the_plan() {
        let resources = Resources::from_config(&config());
        let flag_sets = [
            BuildFlags::all(),
            BuildFlags {
                bundling: true,
                minification: false,
            },
            BuildFlags {
                bundling: false,
                minification: true,
            },
        ];

        for flags in flag_sets {
            let plan = BuildPlan::new(&resources, flags, "/srv/static/");
            let destinations: Vec<&str> = plan
                .concat
                .values()
                .map(|step| step.destination.as_str())
                .chain(plan.uglify.values().map(|step| step.destination.as_str()))
                .collect();

            assert_eq!(plan.obfuscation.website.areas.len(), 2);
            for area in &plan.obfuscation.website.areas {
                assert!(
                    destinations.contains(&area.as_str()),
                    "{} is not produced by the plan ({:?})",
                    area,
                    flags
                );
            }
        }
    }

    #[test]
    fn test_obfuscation_is_empty_without_bundles() {
        let resources = Resources::from_config(&config());
        let plan = BuildPlan::new(&resources, BuildFlags::default(), "/base");

        assert!(plan.obfuscation.website.areas.is_empty());
        let json = plan.to_json(PlanStep::Obfuscate).unwrap();
        assert_eq!(json, serde_json::json!({ "website": { "areas": [] } }));
    }

    #[test]
    fn test_all_step_does_not_include_obfuscation() {
        let resources = Resources::from_config(&config());
        let plan = BuildPlan::new(&resources, BuildFlags::all(), "/base");

        let json = plan.to_json(PlanStep::All).unwrap();
        assert!(json.get("obfuscation").is_none());
    }
}
