use print_layout::*;

#[test]
fn test_request_defaults() {
    let request = LayoutRequest::default();
    assert_eq!(request.orientation, Orientation::Portrait);
    assert_eq!(request.paper_format, "Letter");
    assert!(request.new_layout);
    assert!(request.template.is_none());
    assert!(request.validate().is_ok());
}

#[test]
fn test_request_validation() {
    let mut request = LayoutRequest::default();

    request.scale = 0.0;
    match request.validate() {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("Scale")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    request.scale = 500.0;
    request.paper_format = "  ".to_string();
    match request.validate() {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("paper format")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    // Template mode does not look at scale or paper
    request.new_layout = false;
    request.scale = -1.0;
    assert!(request.validate().is_ok());
}

#[test]
fn test_template_filename() {
    let mut request = LayoutRequest {
        template: Some(LayoutTemplate::new("Atlas", "atlas.mwlayout")),
        ..Default::default()
    };
    assert_eq!(request.template_filename(), "");

    request.new_layout = false;
    assert_eq!(request.template_filename(), "atlas.mwlayout");

    request.template = None;
    assert_eq!(request.template_filename(), "");
}

#[test]
fn test_extent_parsing() {
    let extent: MapExtent = "0, 10.5,70000,35010.5".parse().unwrap();
    assert_eq!(extent, MapExtent::new(0.0, 10.5, 70_000.0, 35_010.5));
    assert_eq!(extent.width(), 70_000.0);
    assert_eq!(extent.height(), 35_000.0);

    assert!("1,2,3".parse::<MapExtent>().is_err());
    assert!("a,b,c,d".parse::<MapExtent>().is_err());
}

#[test]
fn test_paper_format_parsing() {
    assert_eq!("letter".parse::<PaperFormat>().unwrap(), PaperFormat::Letter);
    assert_eq!(" TABLOID ".parse::<PaperFormat>().unwrap(), PaperFormat::Tabloid);
    match "B4".parse::<PaperFormat>() {
        Err(LayoutError::UnknownPaperFormat(name)) => assert_eq!(name, "B4"),
        other => panic!("Expected UnknownPaperFormat, got {:?}", other),
    }
    assert_eq!(PaperFormat::Legal.paper_size(), PaperSize::new(850.0, 1400.0));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_request() {
    use tempfile::NamedTempFile;

    let request = LayoutRequest {
        orientation: Orientation::Landscape,
        paper_format: "A3".to_string(),
        scale: 25_000.0,
        extent: MapExtent::new(1.0, 2.0, 3.0, 4.0),
        new_layout: false,
        template: Some(LayoutTemplate::new("Atlas", "atlas.mwlayout")),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    request.save(path).await.unwrap();
    let loaded = LayoutRequest::load(path).await.unwrap();

    assert_eq!(loaded, request);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_request_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "scale": 5000.0 }"#)
        .await
        .unwrap();

    let loaded = LayoutRequest::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.scale, 5000.0);
    assert_eq!(loaded.paper_format, "Letter");
    assert!(loaded.new_layout);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_json() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), "not json").await.unwrap();

    match LayoutRequest::load(temp_file.path()).await {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("Failed to parse")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
