//! End-to-end scoring and figure tests across the public API.

mod common;

use common::{Constant, centroid_model, partitions};
use modelboard_core::{
    BoardConfig, BoardError, DatasetTag, Metric, ModelRegistry, Normalize, ScoredModel, Split,
};
use pretty_assertions::assert_eq;

#[test]
fn test_add_then_remove_leaves_registry_empty() {
    let mut registry = ModelRegistry::new();
    registry.add(centroid_model("centroid"));
    registry.remove("centroid").unwrap();
    assert!(registry.is_empty());
    assert!(registry.scores(None).is_empty());
}

#[test]
fn test_full_scoring_produces_twelve_records_in_range() -> anyhow::Result<()> {
    let mut model = centroid_model("centroid");
    model.fit_train_test()?;
    model.fit_validate()?;

    let scores = model.scores();
    assert_eq!(scores.len(), 12);
    assert!(scores.iter().all(|r| (0.0..=1.0).contains(&r.value)));
    assert!(scores.iter().all(|r| r.model == "centroid"));
    for tag in DatasetTag::ALL {
        assert_eq!(scores.filter_dataset(tag).len(), 4);
    }
    Ok(())
}

#[test]
fn test_validate_all_adds_four_validate_records_per_model() -> anyhow::Result<()> {
    let mut registry = ModelRegistry::new();
    for name in ["first", "second", "third", "fourth"] {
        let mut model = centroid_model(name);
        model.fit_train_test()?;
        registry.add(model);
    }
    registry.add(ScoredModel::new("yes", Box::new(Constant(true)), partitions()));

    let before = registry.scores(None);
    registry.validate_all()?;
    let after = registry.scores(None);

    let added: Vec<_> = after
        .iter()
        .filter(|r| !before.iter().any(|b| b.model == r.model && b.dataset == r.dataset && b.metric == r.metric))
        .collect();
    assert_eq!(added.len(), 4 * registry.len());
    assert!(added.iter().all(|r| r.dataset == DatasetTag::Validate));
    Ok(())
}

#[test]
fn test_get_split_rejects_unknown_tag() {
    let model = centroid_model("centroid");
    for bad in ["", "TRAIN", "validation", "full"] {
        let err = model.get_split(bad).unwrap_err();
        assert!(matches!(err, BoardError::InvalidDatasetTag(_)), "tag {bad:?}");
    }
    let (inputs, labels) = model.get_split("validate").unwrap();
    assert_eq!(inputs.len(), labels.len());
}

#[test]
fn test_metric_filter_returns_only_that_metric() -> anyhow::Result<()> {
    let mut registry = ModelRegistry::new();
    registry.add(centroid_model("a"));
    registry.add(centroid_model("b"));
    registry.fit_all_train_test()?;
    registry.validate_all()?;

    for metric in Metric::ALL {
        let filtered = registry.scores(Some(metric));
        assert_eq!(filtered.len(), 6);
        assert!(filtered.iter().all(|r| r.metric == metric));
    }
    Ok(())
}

#[test]
fn test_single_class_validation_fails_with_undefined_metric() {
    let mut parts = partitions();
    parts.validate = Split::new(vec![vec![2.0, 2.0], vec![2.5, 1.5]], vec![true, true]).unwrap();
    let mut registry = ModelRegistry::new();
    registry.add(ScoredModel::new("m", Box::new(Constant(true)), parts));

    let err = registry.validate_all().unwrap_err();
    assert!(matches!(err, BoardError::UndefinedMetric(_)));
    assert!(registry.scores(None).is_empty());
}

#[test]
fn test_figures_cover_every_model_in_order() -> anyhow::Result<()> {
    let mut config = BoardConfig::default();
    config.plots.normalize = Normalize::All;
    let mut registry = ModelRegistry::with_config(config)?;
    for name in ["c", "a", "b"] {
        registry.add(centroid_model(name));
    }
    registry.fit_all_train_test()?;

    let roc = registry.roc_figure(DatasetTag::Test)?;
    let names: Vec<_> = roc.series.iter().map(|s| s.model.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
    for series in &roc.series {
        assert_eq!(series.fpr.first(), Some(&0.0));
        assert_eq!(series.tpr.last(), Some(&1.0));
        assert!(series.auc > 0.5);
    }

    let bars = registry.metric_bar_figure(DatasetTag::Train);
    assert_eq!(bars.panels.len(), Metric::ALL.len());
    assert!(bars.panels.iter().all(|p| p.bars.iter().all(|b| b.value.is_some())));

    let grid = registry.confusion_grid(DatasetTag::Train)?;
    assert_eq!((grid.layout.nrows, grid.layout.ncols), (2, 2));
    let panel = grid.get(0, 0).unwrap();
    assert_eq!(panel.model, "c");
    assert_eq!(panel.normalize, Normalize::All);
    let total: f64 = panel.normalized.iter().flatten().sum();
    assert!((total - 1.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_figures_serialize_to_json() -> anyhow::Result<()> {
    let mut registry = ModelRegistry::new();
    registry.add(centroid_model("centroid"));
    registry.fit_all_train_test()?;
    let grid = registry.confusion_grid(DatasetTag::Test)?;
    let value = serde_json::to_value(&grid)?;
    assert_eq!(value["dataset"], "test");
    assert_eq!(value["layout"]["nrows"], 2);
    assert_eq!(value["cells"].as_array().map(Vec::len), Some(2));
    Ok(())
}
