use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use tempfile::TempDir;

use colony_counter::report::{BLUE_LABEL, RED_LABEL};
use colony_counter::{
    count_colonies, decode_upload, export_annotated, load_upload, ColonyReport, ReportFormat,
};

const LIMIT: u64 = 10 * 1024 * 1024;

fn sample_plate() -> RgbImage {
    let mut img = RgbImage::from_pixel(96, 64, Rgb([210, 205, 200]));
    draw_filled_circle_mut(&mut img, (20, 20), 8, Rgb([20, 60, 230]));
    draw_filled_circle_mut(&mut img, (60, 40), 9, Rgb([30, 120, 240]));
    draw_filled_circle_mut(&mut img, (80, 15), 7, Rgb([220, 30, 40]));
    img
}

#[test]
fn png_upload_runs_end_to_end() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("plate.PNG");
    let plate = sample_plate();
    plate.save_with_format(&path, ImageFormat::Png).expect("write png");

    let upload = load_upload(&path, LIMIT).expect("load upload");
    assert_eq!(upload.name, "plate.PNG");
    assert_eq!((upload.width(), upload.height()), (96, 64));
    assert_eq!(upload.original, plate);
    assert_eq!(upload.frame.to_rgb(), plate);

    let result = count_colonies(&upload.frame).expect("detect");
    assert_eq!(result.blue_count, 2);
    assert_eq!(result.red_count, 1);

    let out_dir = dir.path().join("out");
    let annotated = export_annotated(&result, &out_dir, "plate").expect("export");
    assert_eq!(annotated, out_dir.join("plate_annotated.png"));

    let written = image::open(&annotated).expect("reopen").into_rgb8();
    assert_eq!(written, result.annotated.to_rgb());
    assert_eq!(written.dimensions(), plate.dimensions());

    let report = ColonyReport::new(upload.name.clone(), &result).with_annotated_path(annotated);
    let text = report.render(ReportFormat::Text).expect("render");
    assert!(text.contains(&format!("{BLUE_LABEL}: 2")));
    assert!(text.contains(&format!("{RED_LABEL}: 1")));
    assert!(text.contains("plate_annotated.png"));
}

#[test]
fn jpeg_upload_decodes_to_rgb() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("plate.jpeg");
    sample_plate()
        .save_with_format(&path, ImageFormat::Jpeg)
        .expect("write jpeg");

    let upload = load_upload(&path, LIMIT).expect("load upload");
    assert_eq!((upload.width(), upload.height()), (96, 64));
    let result = count_colonies(&upload.frame).expect("detect");
    assert_eq!(result.annotated.width(), 96);
    assert_eq!(result.annotated.height(), 64);
}

#[test]
fn in_memory_upload_sniffs_format() {
    let mut bytes = std::io::Cursor::new(Vec::new());
    sample_plate()
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encode png");

    let upload = decode_upload(bytes.get_ref(), LIMIT).expect("decode");
    assert_eq!(upload.name, "upload");
    assert_eq!(upload.original, sample_plate());
}

#[test]
fn unsupported_or_oversized_uploads_are_rejected() {
    let dir = TempDir::new().expect("temp dir");

    let gif = dir.path().join("plate.gif");
    std::fs::write(&gif, b"GIF89a").expect("write gif");
    let err = load_upload(&gif, LIMIT).unwrap_err();
    assert!(err.to_string().contains("unsupported upload type"));

    let png = dir.path().join("plate.png");
    sample_plate()
        .save_with_format(&png, ImageFormat::Png)
        .expect("write png");
    assert!(load_upload(&png, 16).is_err());

    let corrupt = dir.path().join("broken.jpg");
    std::fs::write(&corrupt, b"not really a jpeg").expect("write corrupt");
    assert!(load_upload(&corrupt, LIMIT).is_err());

    assert!(load_upload(&dir.path().join("missing.png"), LIMIT).is_err());
}
