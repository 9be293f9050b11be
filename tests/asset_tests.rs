mod common;

#[cfg(test)]
pub mod asset_tests {
    use std::fs;

    use super::common::*;

    use refract_site::catalog::*;
    use refract_site::common::*;
    use refract_site::models::*;
    use refract_site::services::AssetDir;

    #[test]
    fn test_resolve_loads_svg_markup() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("tree.svg"),
            format!("<?xml version=\"1.0\"?>\n{SVG}\n"),
        )
        .unwrap();

        let icon = AssetDir::new(dir.path())
            .resolve(&IconRef::new("tree.svg"))
            .unwrap();

        assert_eq!(icon.file(), "tree.svg");
        assert_eq!(icon.markup(), SVG);
    }

    #[test]
    fn test_resolve_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = AssetDir::new(dir.path())
            .resolve(&IconRef::new("missing.svg"))
            .unwrap_err();

        match err {
            AssetError::NotFound { path } => assert_eq!(path, dir.path().join("missing.svg")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_fails_on_non_svg() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("logo.svg"), "not an image").unwrap();

        let err = AssetDir::new(dir.path())
            .resolve(&IconRef::new("logo.svg"))
            .unwrap_err();

        assert!(matches!(err, AssetError::NotSvg { .. }));
    }

    #[test]
    fn test_resolve_fails_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("icons.svg")).unwrap();

        let err = AssetDir::new(dir.path())
            .resolve(&IconRef::new("icons.svg"))
            .unwrap_err();

        assert!(matches!(err, AssetError::Unreadable { .. }));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetDir::new(dir.path().join("img"));
        write_icons(dir.path(), &["secret.svg"]);

        let err = assets.resolve(&IconRef::new("../secret.svg")).unwrap_err();

        assert!(matches!(err, AssetError::InvalidReference(r) if r == "../secret.svg"));
    }

    #[test]
    fn test_catalog_resolve_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        write_icons(dir.path(), &["a.svg", "b.svg", "c.svg"]);

        let resolved = FeatureCatalog::new(scenario_records())
            .resolve(&AssetDir::new(dir.path()))
            .unwrap();

        let titles: Vec<_> = resolved.iter().map(ResolvedFeature::title).collect();
        let icons: Vec<_> = resolved.iter().map(|f| f.icon.file()).collect();
        assert_eq!(titles, ["Build Fast", "Stay Focused", "Code Less"]);
        assert_eq!(icons, ["a.svg", "b.svg", "c.svg"]);
    }

    #[test]
    fn test_catalog_resolve_fails_on_unresolvable_icon() {
        let dir = tempfile::tempdir().unwrap();
        write_icons(dir.path(), &["a.svg", "c.svg"]);

        let err = FeatureCatalog::new(scenario_records())
            .resolve(&AssetDir::new(dir.path()))
            .unwrap_err();

        match err {
            SiteError::Asset(AssetError::NotFound { path }) => {
                assert_eq!(path, dir.path().join("b.svg"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_catalog_resolve_validates_first() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = FeatureCatalog::new(vec![record("", "a.svg")]);

        let err = catalog.resolve(&AssetDir::new(dir.path())).unwrap_err();

        assert!(matches!(
            err,
            SiteError::Catalog(CatalogError::EmptyField {
                position: 0,
                field: "title"
            })
        ));
    }

    #[test]
    fn test_bundled_icons_resolve() {
        let assets = AssetDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static/img"));

        let resolved = FeatureCatalog::builtin().resolve(&assets).unwrap();

        assert_eq!(resolved.len(), FEATURE_LIST.len());
        assert!(resolved.iter().all(|f| f.icon.markup().starts_with("<svg")));
    }
}
