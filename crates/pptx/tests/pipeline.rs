//! End-to-end pipeline tests: content JSON in, valid package out.

use std::io::{Cursor, Read};

use deck_chart::RasterChartBackend;
use deck_core::{build_deck, CellValue, DeckRequest, Error, SlideContent, TableSpec};
use deck_pptx::PptxDocument;

fn generate(request: &DeckRequest) -> Vec<u8> {
    let mut doc = PptxDocument::new();
    build_deck(&mut doc, &RasterChartBackend::default(), request).unwrap()
}

fn read_part(package: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(package.to_vec())).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    out
}

fn has_part(package: &[u8], name: &str) -> bool {
    let mut archive = zip::ZipArchive::new(Cursor::new(package.to_vec())).unwrap();
    let ok = archive.by_name(name).is_ok();
    ok
}

#[test]
fn json_request_becomes_a_complete_package() {
    let json = r#"{
        "search_phrase": "Quarterly Review",
        "slides": [
            {
                "title": "Revenue",
                "headline": "Strong quarter",
                "content": "• Revenue up 12%",
                "chartType": "bar",
                "chartData": {"labels": ["Q1", "Q2"], "values": [10, 12]}
            },
            {
                "title": "Regional Breakdown",
                "tableData": {"headers": ["Region", "Sales"], "rows": [["NA", 5], ["EU", 7]]}
            }
        ]
    }"#;
    let request: DeckRequest = serde_json::from_str(json).unwrap();
    let package = generate(&request);

    // Title + 2 content + summary.
    assert!(has_part(&package, "ppt/slides/slide4.xml"));
    assert!(!has_part(&package, "ppt/slides/slide5.xml"));

    let title = read_part(&package, "ppt/slides/slide1.xml");
    assert!(title.contains("Business Analysis: Quarterly Review"));

    // First content slide carries its text and the rendered chart.
    let revenue = read_part(&package, "ppt/slides/slide2.xml");
    assert!(revenue.contains("Revenue"));
    assert!(revenue.contains("Strong quarter"));
    assert!(revenue.contains("r:embed=\"rId2\""));

    let mut archive = zip::ZipArchive::new(Cursor::new(package.clone())).unwrap();
    let mut png = Vec::new();
    archive
        .by_name("ppt/media/image1.png")
        .unwrap()
        .read_to_end(&mut png)
        .unwrap();
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);

    // Second content slide holds a header + 2 data row table.
    let breakdown = read_part(&package, "ppt/slides/slide3.xml");
    assert_eq!(breakdown.matches("<a:tr ").count(), 3);
    assert!(breakdown.contains("Region"));

    let summary = read_part(&package, "ppt/slides/slide4.xml");
    assert!(summary.contains("Key Takeaways"));
}

#[test]
fn oversized_table_is_truncated_to_eleven_rows() {
    let rows: Vec<Vec<CellValue>> = (0..15)
        .map(|i| vec![CellValue::from(format!("row {i}").as_str()), CellValue::from(i as f64)])
        .collect();
    let mut slide = SlideContent::text("Big Table", "details");
    slide.table_data = Some(TableSpec {
        headers: vec!["Name".into(), "Value".into()],
        rows,
    });
    let request = DeckRequest::from_slides(vec![slide]);
    let package = generate(&request);

    let xml = read_part(&package, "ppt/slides/slide2.xml");
    assert_eq!(xml.matches("<a:tr ").count(), 11);
    assert!(xml.contains("row 9"));
    assert!(!xml.contains("row 10"));
}

#[test]
fn empty_request_produces_no_package() {
    let mut doc = PptxDocument::new();
    let result = build_deck(&mut doc, &RasterChartBackend::default(), &DeckRequest::default());
    assert!(matches!(result, Err(Error::EmptyInput)));
}
