use pdf_paginate::*;

#[test]
fn test_default_options_are_valid() {
    let options = PaginationOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.page_format, PageFormat::A4);
    assert_eq!(options.margin_mm, 10.0);
    assert_eq!(options.scale, 1.0);
    assert!(options.use_marker_pagination);
    assert!(!options.force_landscape);
}

#[test]
fn test_validation_rejects_bad_scale() {
    for scale in [0.0, -2.0, f32::INFINITY] {
        let options = PaginationOptions {
            scale,
            ..Default::default()
        };
        match options.validate() {
            Err(PaginateError::Config(msg)) => assert!(msg.contains("Scale")),
            other => panic!("Expected Config error for scale {}, got {:?}", scale, other),
        }
    }
}

#[test]
fn test_validation_rejects_negative_margin() {
    let options = PaginationOptions {
        margin_mm: -1.0,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(PaginateError::Config(_))));
}

#[test]
fn test_validation_rejects_margin_without_content_area() {
    // A4 is 210mm wide: 105mm on each side leaves nothing
    let options = PaginationOptions {
        margin_mm: 105.0,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(PaginateError::Config(_))));

    let options = PaginationOptions {
        margin_mm: 104.0,
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_paginator_new_validates() {
    let options = PaginationOptions {
        scale: 0.0,
        ..Default::default()
    };
    assert!(Paginator::new(options).is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = PaginationOptions {
        page_format: PageFormat::Letter,
        margin_mm: 12.5,
        scale: 2.0,
        force_landscape: true,
        use_marker_pagination: false,
        add_page_numbers: true,
        page_number_start: 3,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = PaginationOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "page_format": "Letter" }"#).unwrap();

    let loaded = PaginationOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.page_format, PageFormat::Letter);
    assert_eq!(loaded.margin_mm, PaginationOptions::default().margin_mm);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_json() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    match PaginationOptions::load(temp_file.path()).await {
        Err(PaginateError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
