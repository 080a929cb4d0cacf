//! Library-level tests for resource sets, descriptors and the build plan
//!
//! Loads fixture declarations from disk and checks that the tags rendered for
//! a page line up with the files the build produces.

use proptest::prelude::*;
use scriptset::config::{ConfigLoader, ResourceConfig};
use scriptset::error::ScriptSetError;
use scriptset::pipeline::{BuildPlan, PlanStep, Task};
use scriptset::resources::{
    build_concat_descriptors, build_minify_descriptors, render_tags, Resources,
};
use scriptset::target::{BuildFlags, BuildTarget};

mod common;
use common::assertions::script_sources;
use common::fixtures;

const BASE: &str = "/home/site/app/static";

#[test]
fn test_js_module_declaration_loads_like_json() {
    let (_json_dir, json_path) = fixtures::create_json_project(fixtures::SITE_DECLARATION)
        .expect("Failed to create test fixture");
    let (_js_dir, js_path) = fixtures::create_js_module_project(fixtures::SITE_DECLARATION)
        .expect("Failed to create test fixture");

    let from_json = ConfigLoader::load(&json_path).unwrap();
    let from_js = ConfigLoader::load(&js_path).unwrap();
    assert_eq!(from_json, from_js);
}

#[test]
fn test_discovery_finds_configuration_subdir() {
    let (temp_dir, js_path) = fixtures::create_js_module_project(fixtures::BUNDLED_DECLARATION)
        .expect("Failed to create test fixture");

    let (found, config) = ConfigLoader::resolve(None, temp_dir.path()).unwrap();
    assert_eq!(found, js_path);
    assert!(config.bundling);
    assert_eq!(config.sets.len(), 2);
}

#[test]
fn test_bundled_tags_point_at_concat_destinations() {
    let (_dir, path) = fixtures::create_json_project(fixtures::SITE_DECLARATION)
        .expect("Failed to create test fixture");
    let config = ConfigLoader::load(&path).unwrap();

    let flags = BuildFlags {
        bundling: true,
        minification: false,
    };
    let resources = Resources::from_config(&config).with_flags(flags);
    let html = render_tags(&resources, &["libs", "public", "admin"]).unwrap();
    let concat = build_concat_descriptors(&resources, BASE);

    for (name, src) in ["libs", "public", "admin"].iter().zip(script_sources(&html)) {
        let dest = &concat[*name].destination;
        assert_eq!(format!("{}{}", BASE, src), *dest);
    }
}

#[test]
fn test_minified_tags_point_at_minify_destinations() {
    let (_dir, path) = fixtures::create_json_project(fixtures::SITE_DECLARATION)
        .expect("Failed to create test fixture");
    let config = ConfigLoader::load(&path).unwrap();

    let flags = BuildFlags::resolve(&config, BuildTarget::Prod);
    let resources = Resources::from_config(&config).with_flags(flags);
    let html = render_tags(&resources, &["public"]).unwrap();
    let uglify = build_minify_descriptors(&resources, BASE);

    assert_eq!(
        format!("{}{}", BASE, script_sources(&html)[0]),
        uglify["public"].destination
    );
}

#[test]
fn test_parent_marker_resolves_outside_static_root() {
    let (_dir, path) = fixtures::create_json_project(fixtures::SITE_DECLARATION)
        .expect("Failed to create test fixture");
    let resources = Resources::from_config(&ConfigLoader::load(&path).unwrap());

    let concat = build_concat_descriptors(&resources, BASE);
    assert_eq!(
        concat["public"].sources,
        vec![
            "/home/site/app/static/scripts/areas/public/index.js",
            "/home/site/app/shared/scripts/cookies.js",
        ]
    );
}

#[test]
fn test_unknown_set_error_lists_declared_names() {
    let resources = Resources::from_config(
        &ResourceConfig::default()
            .with_set("public", ["a.js"])
            .with_set("libs", ["b.js"]),
    );

    match render_tags(&resources, &["public", "admin"]) {
        Err(ScriptSetError::UnknownResourceSet { name, available }) => {
            assert_eq!(name, "admin");
            assert_eq!(available, vec!["libs", "public"]);
        }
        other => panic!("expected UnknownResourceSet, got {:?}", other),
    }
}

#[test]
fn test_plan_json_for_bundling_only() {
    let (_dir, path) = fixtures::create_json_project(fixtures::BUNDLED_DECLARATION)
        .expect("Failed to create test fixture");
    let config = ConfigLoader::load(&path).unwrap();
    let flags = BuildFlags::resolve(&config, BuildTarget::Dev);
    let resources = Resources::from_config(&config);

    let plan = BuildPlan::new(&resources, flags, BASE);
    assert_eq!(plan.tasks, vec![Task::Concat]);
    assert!(plan.uglify.is_empty());

    let areas = plan.to_json(PlanStep::Obfuscate).unwrap();
    assert_eq!(
        areas["website"]["areas"][0],
        "/home/site/app/static/scripts/libs.built.js"
    );
}

fn set_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,10}"
}

fn file_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("(~/)?[a-z]{1,6}(/[a-z]{1,6}){0,2}\\.js", 0..6)
}

fn declaration() -> impl Strategy<Value = ResourceConfig> {
    prop::collection::btree_map(set_name(), file_list(), 1..6).prop_map(|sets| ResourceConfig {
        bundling: false,
        minification: false,
        sets,
    })
}

proptest! {
    #[test]
    fn prop_descriptors_cover_every_set(config in declaration()) {
        let resources = Resources::from_config(&config);
        let concat = build_concat_descriptors(&resources, BASE);
        let uglify = build_minify_descriptors(&resources, BASE);

        prop_assert_eq!(concat.len(), config.sets.len());
        prop_assert_eq!(uglify.len(), config.sets.len());
        for (name, files) in &config.sets {
            prop_assert_eq!(concat[name].sources.len(), files.len());
            prop_assert_eq!(&uglify[name].source, &concat[name].destination);
        }
    }

    #[test]
    fn prop_prod_renders_one_tag_per_requested_set(config in declaration()) {
        let resources = Resources::from_config(&config).with_flags(BuildFlags::all());
        let names: Vec<&str> = config.sets.keys().map(String::as_str).collect();
        let html = render_tags(&resources, &names).unwrap();

        let sources = script_sources(&html);
        prop_assert_eq!(sources.len(), names.len());
        for (src, name) in sources.iter().zip(&names) {
            prop_assert_eq!(src, &format!("/scripts/{}.min.js", name));
        }
    }
}
