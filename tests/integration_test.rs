/// Integration tests for the application layer
mod test_utilities;

use showdeps::prelude::*;
use showdeps::shared::error::ShowdepsError;
use std::collections::BTreeSet;
use std::path::PathBuf;
use test_utilities::mocks::*;

/// app imports lib1 and lib2; lib1 imports lib2 and the standard package core
fn scenario() -> MockPackageResolver {
    MockPackageResolver::new()
        .with_package("x.io/app", &["x.io/lib1", "x.io/lib2"])
        .with_package("x.io/lib1", &["x.io/lib2", "core"])
        .with_package("x.io/lib2", &[])
        .with_package("core", &[])
}

fn request(packages: &[&str]) -> DependencyRequest {
    DependencyRequest::new(
        packages.iter().map(|s| s.to_string()).collect(),
        PathBuf::from("/work"),
    )
}

fn execute(resolver: MockPackageResolver, request: DependencyRequest) -> Result<DependencyResponse> {
    ShowDependenciesUseCase::new(resolver, MockProgressReporter::new()).execute(request)
}

fn text(report: &DependencyReport) -> String {
    TextFormatter::new().format(report).unwrap()
}

#[test]
fn test_direct_dependencies() {
    let response = execute(scenario(), request(&["x.io/app"])).unwrap();
    assert_eq!(text(&response.report), "x.io/lib1\nx.io/lib2\n");
}

#[test]
fn test_recursive_without_standard_packages() {
    let mut req = request(&["x.io/app"]);
    req.all = true;
    let response = execute(scenario(), req).unwrap();
    assert_eq!(text(&response.report), "x.io/lib1\nx.io/lib2\n");
}

#[test]
fn test_recursive_with_standard_packages() {
    let mut req = request(&["x.io/app"]);
    req.all = true;
    req.include_standard = true;
    let response = execute(scenario(), req).unwrap();
    assert_eq!(text(&response.report), "core\nx.io/lib1\nx.io/lib2\n");
}

#[test]
fn test_annotated_importers_are_sorted_and_unique() {
    let mut req = request(&["x.io/app"]);
    req.all = true;
    req.show_importers = true;
    let response = execute(scenario(), req).unwrap();
    assert_eq!(
        text(&response.report),
        "x.io/lib1 x.io/app\nx.io/lib2 x.io/app x.io/lib1\n"
    );
}

#[test]
fn test_each_package_resolved_once() {
    let resolver = scenario();
    let mut req = request(&["x.io/app"]);
    req.all = true;
    req.include_standard = true;
    execute(resolver.clone(), req).unwrap();

    for name in ["x.io/app", "x.io/lib1", "x.io/lib2", "core"] {
        assert_eq!(resolver.full_resolutions_of(name), 1, "{}", name);
    }
}

#[test]
fn test_roots_never_listed() {
    let resolver = MockPackageResolver::new()
        .with_package("x.io/a", &["x.io/b"])
        .with_package("x.io/b", &["x.io/a", "x.io/c"])
        .with_package("x.io/c", &[]);
    let mut req = request(&["x.io/a", "x.io/b"]);
    req.all = true;
    let response = execute(resolver, req).unwrap();

    assert_eq!(text(&response.report), "x.io/c\n");
}

#[test]
fn test_cycle_terminates() {
    let resolver = MockPackageResolver::new()
        .with_package("x.io/app", &["x.io/a"])
        .with_package("x.io/a", &["x.io/b"])
        .with_package("x.io/b", &["x.io/a", "x.io/target"])
        .with_package("x.io/target", &[]);
    let mut req = request(&["x.io/app"]);
    req.why = Some("x.io/target".to_string());
    let response = execute(resolver, req).unwrap();

    assert_eq!(text(&response.report), "x.io/app x.io/a x.io/b x.io/target\n");
}

#[test]
fn test_why_keeps_only_packages_leading_to_target() {
    let resolver = MockPackageResolver::new()
        .with_package("x.io/app", &["x.io/lib1", "x.io/other"])
        .with_package("x.io/lib1", &["x.io/lib2"])
        .with_package("x.io/lib2", &["x.io/target"])
        .with_package("x.io/other", &[])
        .with_package("x.io/target", &[]);
    let mut req = request(&["x.io/app"]);
    req.why = Some("x.io/target".to_string());
    req.all = true;
    let response = execute(resolver, req).unwrap();

    let DependencyReport::Importers(views) = &response.report else {
        panic!("expected importers report");
    };
    let names: Vec<&str> = views.iter().map(|v| v.package.as_str()).collect();
    assert_eq!(names, vec!["x.io/lib1", "x.io/lib2", "x.io/target"]);
}

#[test]
fn test_chains_are_valid_paths_from_roots() {
    let resolver = MockPackageResolver::new()
        .with_package("x.io/app", &["x.io/a", "x.io/b"])
        .with_package("x.io/tool", &["x.io/b"])
        .with_package("x.io/a", &["x.io/c"])
        .with_package("x.io/b", &["x.io/c", "x.io/target"])
        .with_package("x.io/c", &["x.io/target"])
        .with_package("x.io/target", &[]);
    let mut req = request(&["x.io/app", "x.io/tool"]);
    req.why = Some("x.io/target".to_string());
    req.max_chains = 0;
    let response = execute(resolver.clone(), req).unwrap();

    let DependencyReport::Chains(chains) = &response.report else {
        panic!("expected chains report");
    };
    assert!(!chains.is_empty());

    let roots: BTreeSet<&str> = ["x.io/app", "x.io/tool"].into_iter().collect();
    for chain in chains {
        assert!(roots.contains(chain.root().unwrap().as_str()));
        assert_eq!(chain.leaf().unwrap().as_str(), "x.io/target");
        for pair in chain.packages().windows(2) {
            let info = resolver
                .resolve(&pair[0], std::path::Path::new("/work"), ResolveMode::Full)
                .unwrap();
            assert!(info.imports().contains(&pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    // Grouped by root in sorted order
    let root_order: Vec<&str> = chains.iter().map(|c| c.root().unwrap().as_str()).collect();
    let mut sorted = root_order.clone();
    sorted.sort();
    assert_eq!(root_order, sorted);
}

#[test]
fn test_max_chains_per_root() {
    let resolver = MockPackageResolver::new()
        .with_package("x.io/app", &["x.io/a", "x.io/b"])
        .with_package("x.io/a", &["x.io/target"])
        .with_package("x.io/b", &["x.io/target"])
        .with_package("x.io/target", &[]);

    let mut req = request(&["x.io/app"]);
    req.why = Some("x.io/target".to_string());
    let one = execute(resolver.clone(), req.clone()).unwrap();
    assert_eq!(one.report.len(), 1);

    req.max_chains = 0;
    let all = execute(resolver, req).unwrap();
    assert_eq!(
        text(&all.report),
        "x.io/app x.io/a x.io/target\nx.io/app x.io/b x.io/target\n"
    );
}

#[test]
fn test_output_is_deterministic() {
    let mut req = request(&["x.io/app"]);
    req.all = true;
    req.include_standard = true;
    req.show_importers = true;

    let first = execute(scenario(), req.clone()).unwrap();
    let second = execute(scenario(), req).unwrap();
    assert_eq!(first.report, second.report);
}

#[test]
fn test_unresolvable_dependency_fails_without_output() {
    let resolver = MockPackageResolver::new().with_package("x.io/app", &["x.io/missing"]);
    let mut req = request(&["x.io/app"]);
    req.all = true;
    let err = execute(resolver, req).unwrap_err();

    match err.downcast_ref::<ShowdepsError>() {
        Some(ShowdepsError::Resolution { package, .. }) => assert_eq!(package, "x.io/missing"),
        other => panic!("expected resolution error, got {:?}", other),
    }
}

#[test]
fn test_malformed_pattern_fails_before_resolution() {
    let resolver = scenario();
    let mut req = request(&["x.io/app"]);
    req.why = Some(String::new());
    assert!(execute(resolver.clone(), req).is_err());
    assert!(resolver.calls().is_empty());
}

#[test]
fn test_default_argument_is_current_package() {
    let resolver = scenario().with_alias(".", "x.io/app");
    let response = execute(resolver, request(&[])).unwrap();

    assert_eq!(response.roots.len(), 1);
    assert_eq!(text(&response.report), "x.io/lib1\nx.io/lib2\n");
}

#[test]
fn test_progress_reported_through_port() {
    let reporter = MockProgressReporter::new();
    let mut req = request(&["x.io/app"]);
    req.all = true;
    ShowDependenciesUseCase::new(scenario(), reporter.clone())
        .execute(req)
        .unwrap();

    let messages = reporter.get_messages();
    assert!(messages.iter().any(|m| m.starts_with("Progress: 1/0 - x.io/app")));
    assert!(reporter.was_finished());
    assert!(reporter.errors().is_empty());
}

#[test]
fn test_unmatched_root_pattern_is_reported() {
    let reporter = MockProgressReporter::new();
    let resolver = scenario().with_pattern("x.io/...", &["x.io/app"]);
    let response = ShowDependenciesUseCase::new(resolver, reporter.clone())
        .execute(request(&["x.io/...", "y.io/..."]))
        .unwrap();

    assert_eq!(response.roots.len(), 1);
    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("y.io/..."));
}

#[test]
fn test_graph_builder_directly() {
    let resolver = scenario();
    let roots: RootSet = [PackageId::new("x.io/app").unwrap()].into_iter().collect();
    let options = GraphOptions {
        recursive: true,
        include_standard: false,
        include_test_deps: true,
    };

    let mut index = GraphBuilder::new(&resolver, options)
        .build(&roots, std::path::Path::new("/work"))
        .unwrap();
    index.normalize();

    let keys: Vec<&str> = index.packages().map(PackageId::as_str).collect();
    assert_eq!(keys, vec!["x.io/app", "x.io/lib1", "x.io/lib2"]);
    assert!(index.importers(&PackageId::new("x.io/app").unwrap()).is_empty());
}

#[test]
fn test_json_report() {
    let mut req = request(&["x.io/app"]);
    req.why = Some("x.io/lib2".to_string());
    let response = execute(scenario(), req).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter::new().format(&response.report).unwrap()).unwrap();
    assert_eq!(json["mode"], "chains");
    assert_eq!(json["items"][0], serde_json::json!(["x.io/app", "x.io/lib2"]));
}
