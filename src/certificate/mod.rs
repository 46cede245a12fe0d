//! Certificate of completion rendering.
//!
//! [`render`] is a pure function from a [`CertificateRequest`] to a
//! 1200×800 RGBA image: the same request always produces the same pixels.
//! Writing the image to disk is a separate, explicit step ([`Certificate::save`]).

mod canvas;
mod font;

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{AssessmentError, Result};

use canvas::{Canvas, Rgb, TextStyle};

pub const CERTIFICATE_WIDTH: u32 = 1200;
pub const CERTIFICATE_HEIGHT: u32 = 800;

const FILENAME_SUFFIX: &str = "_Adware_Assessment_Certificate.png";

const TITLE: &str = "CERTIFICATE OF COMPLETION";
const SUBTITLE: &str = "Adware Security Assessment";
const AWARDED_TO: &str = "This certificate is proudly awarded to";
const ACHIEVEMENT: &str = "for successfully completing the Adware Security Assessment";
const ISSUER_MARK: &str = "EXPLOIT";
const ISSUER_TAGLINE: &str = "Adware Simulator & Cybersecurity Training Platform";

const GRAY_900: Rgb = Rgb::from_hex(0x1f2937);
const GRAY_700: Rgb = Rgb::from_hex(0x374151);
const GRAY_500: Rgb = Rgb::from_hex(0x6b7280);
const GRAY_400: Rgb = Rgb::from_hex(0x9ca3af);
const GRAY_300: Rgb = Rgb::from_hex(0xd1d5db);
const RED_500: Rgb = Rgb::from_hex(0xef4444);
const EMERALD_500: Rgb = Rgb::from_hex(0x10b981);
const WHITE: Rgb = Rgb::from_hex(0xffffff);

/// Widest the name line may be before it is drawn smaller.
const NAME_MAX_WIDTH: u32 = 1040;
const NAME_MIN_SIZE: u32 = 10;

const BADGE_CENTER: (i64, i64) = (CERTIFICATE_WIDTH as i64 / 2, 720);
const BADGE_RADIUS: f32 = 30.0;

/// What goes on a certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRequest {
    pub name: String,
    pub percentage: u8,
    pub issue_date: NaiveDate,
}

/// A rendered certificate ready to be encoded or saved.
#[derive(Debug, Clone)]
pub struct Certificate {
    image: RgbaImage,
    filename: String,
}

impl Certificate {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Suggested file name, e.g. `Jane_Doe_Adware_Assessment_Certificate.png`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Encode the certificate as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(self.image.clone())
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Write the PNG into `dir` and return the path.
    ///
    /// The file is named after [`Certificate::filename`] with path separators
    /// and other unsafe characters replaced, so it always lands inside `dir`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(safe_file_name(&self.filename));
        fs::write(&path, self.to_png()?)?;
        tracing::info!(path = %path.display(), "saved certificate");
        Ok(path)
    }
}

/// Replace every run of whitespace in `name` with a single underscore.
/// Leading and trailing whitespace is dropped.
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Make `filename` usable as a single path component.
///
/// Separators, reserved characters and control characters become `_`, and
/// leading dots are dropped so the result is neither hidden nor `..`.
pub fn safe_file_name(filename: &str) -> String {
    let replaced: String = filename
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = replaced.trim_start_matches('.');
    if trimmed.is_empty() {
        "_".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn certificate_filename(name: &str) -> String {
    format!("{}{}", sanitize_name(name), FILENAME_SUFFIX)
}

/// Long US-style date, e.g. `October 19, 2026`.
pub fn format_issue_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Render a certificate for a passing score.
///
/// Fails with [`AssessmentError::Precondition`] when the name is blank or the
/// percentage is below `pass_threshold`.
pub fn render(request: &CertificateRequest, pass_threshold: u8) -> Result<Certificate> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AssessmentError::Precondition(
            "a certificate needs the name of the person who passed".to_string(),
        ));
    }
    if request.percentage < pass_threshold {
        return Err(AssessmentError::Precondition(format!(
            "a certificate requires at least {}%, the score was {}%",
            pass_threshold, request.percentage
        )));
    }

    let mut canvas = Canvas::new(CERTIFICATE_WIDTH, CERTIFICATE_HEIGHT);
    draw_frame(&mut canvas);
    draw_text(&mut canvas, name, request);
    draw_badge(&mut canvas);

    tracing::info!(percentage = request.percentage, "rendered certificate");
    Ok(Certificate {
        image: canvas.into_image(),
        filename: certificate_filename(name),
    })
}

fn draw_frame(canvas: &mut Canvas) {
    let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));

    canvas.fill_diagonal_gradient(&[(0.0, GRAY_900), (0.5, GRAY_700), (1.0, GRAY_900)]);
    canvas.stroke_rect(40, 40, width - 80, height - 80, 8, RED_500);
    canvas.stroke_rect(60, 60, width - 120, height - 120, 2, GRAY_500);
}

fn draw_text(canvas: &mut Canvas, name: &str, request: &CertificateRequest) {
    let cx = i64::from(canvas.width()) / 2;
    let score_line = format!("with a score of {}%", request.percentage);
    let issued_line = format!("Issued on {}", format_issue_date(request.issue_date));

    let lines: [(&str, i64, TextStyle); 9] = [
        (TITLE, 150, TextStyle::bold(48, WHITE)),
        (SUBTITLE, 200, TextStyle::bold(32, RED_500)),
        (AWARDED_TO, 280, TextStyle::regular(24, GRAY_300)),
        (name, 340, TextStyle::bold(name_size(name), WHITE)),
        (ACHIEVEMENT, 400, TextStyle::regular(20, GRAY_300)),
        (&score_line, 430, TextStyle::regular(20, GRAY_300)),
        (ISSUER_MARK, 520, TextStyle::bold(28, RED_500)),
        (ISSUER_TAGLINE, 550, TextStyle::regular(18, GRAY_400)),
        (&issued_line, 650, TextStyle::regular(16, GRAY_500)),
    ];

    for (text, baseline, style) in lines {
        canvas.fill_text_centered(text, cx, baseline, style);
    }
}

/// Largest size up to 40 at which `name` fits the certificate, stepping down
/// one font scale at a time.
fn name_size(name: &str) -> u32 {
    let mut size = 40;
    while size > NAME_MIN_SIZE
        && font::text_width(name, font::scale_for_size(size)) > NAME_MAX_WIDTH
    {
        size -= 10;
    }
    size
}

fn draw_badge(canvas: &mut Canvas) {
    let (cx, cy) = BADGE_CENTER;
    canvas.fill_circle(cx, cy, BADGE_RADIUS, EMERALD_500);
    canvas.stroke_circle(cx, cy, BADGE_RADIUS, 3.0, WHITE);
    canvas.stroke_polyline(&[(cx - 12, cy), (cx - 4, cy + 8), (cx + 12, cy - 8)], 4.0, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, percentage: u8) -> CertificateRequest {
        CertificateRequest {
            name: name.to_string(),
            percentage,
            issue_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        }
    }

    fn rgb(certificate: &Certificate, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = certificate.image().get_pixel(x, y).0;
        [r, g, b]
    }

    #[test]
    fn test_filename_collapses_whitespace() {
        assert_eq!(
            certificate_filename("Jane Doe"),
            "Jane_Doe_Adware_Assessment_Certificate.png"
        );
        assert_eq!(sanitize_name("Ada \t  King\nLovelace"), "Ada_King_Lovelace");
        assert_eq!(sanitize_name("  Grace  "), "Grace");
    }

    #[test]
    fn test_format_issue_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_issue_date(date), "March 7, 2026");
    }

    #[test]
    fn test_render_layout() {
        let certificate = render(&request("Jane Doe", 100), 80).unwrap();
        assert_eq!(certificate.image().dimensions(), (1200, 800));
        assert_eq!(certificate.filename(), "Jane_Doe_Adware_Assessment_Certificate.png");

        // Gradient starts at the top-left corner.
        assert_eq!(rgb(&certificate, 0, 0), [0x1f, 0x29, 0x37]);
        // Outer red border and inner gray border.
        assert_eq!(rgb(&certificate, 40, 400), [0xef, 0x44, 0x44]);
        assert_eq!(rgb(&certificate, 600, 40), [0xef, 0x44, 0x44]);
        assert_eq!(rgb(&certificate, 60, 400), [0x6b, 0x72, 0x80]);
        // Badge disc above the checkmark.
        assert_eq!(rgb(&certificate, 600, 700), [0x10, 0xb9, 0x81]);
    }

    #[test]
    fn test_render_draws_title_text() {
        let certificate = render(&request("Jane Doe", 92), 80).unwrap();
        let white_in_title = (110..150)
            .flat_map(|y| (0..1200).map(move |x| (x, y)))
            .filter(|&(x, y)| rgb(&certificate, x, y) == [0xff, 0xff, 0xff])
            .count();
        assert!(white_in_title > 500);
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render(&request("Jane Doe", 88), 80).unwrap();
        let second = render(&request("Jane Doe", 88), 80).unwrap();
        assert_eq!(first.image(), second.image());

        let other = render(&request("John Roe", 88), 80).unwrap();
        assert_ne!(first.image(), other.image());
    }

    #[test]
    fn test_render_requires_passing_score_and_name() {
        let err = render(&request("Jane Doe", 76), 80).unwrap_err();
        assert!(matches!(err, AssessmentError::Precondition(_)));

        let err = render(&request("   ", 100), 80).unwrap_err();
        assert!(matches!(err, AssessmentError::Precondition(_)));
    }

    #[test]
    fn test_safe_file_name() {
        assert_eq!(
            safe_file_name("../Jane_Doe_Adware_Assessment_Certificate.png"),
            "_Jane_Doe_Adware_Assessment_Certificate.png"
        );
        assert_eq!(safe_file_name("Jane/Doe\\C:x"), "Jane_Doe_C_x");
        assert_eq!(safe_file_name(".hidden"), "hidden");
        assert_eq!(safe_file_name(".."), "_");
    }

    #[test]
    fn test_save_stays_inside_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let escaping = render(&request("../Jane Doe", 100), 80).unwrap();
        assert_eq!(
            escaping.filename(),
            "../Jane_Doe_Adware_Assessment_Certificate.png"
        );
        let path = escaping.save(&out).unwrap();
        assert_eq!(path.parent().unwrap(), out.as_path());
        assert!(!dir.path().join("Jane_Doe_Adware_Assessment_Certificate.png").exists());

        let slashed = render(&request("Jane/Doe", 100), 80).unwrap();
        let path = slashed.save(&out).unwrap();
        assert_eq!(path, out.join("Jane_Doe_Adware_Assessment_Certificate.png"));
        assert!(path.exists());
    }

    #[test]
    fn test_long_name_stays_inside_border() {
        let name = "W".repeat(48);
        assert!(name_size(&name) < 40);
        assert_eq!(name_size("Jane Doe"), 40);

        let certificate = render(&request(&name, 100), 80).unwrap();
        let white_outside = (300..345)
            .flat_map(|y| (0..60).chain(1140..1200).map(move |x| (x, y)))
            .filter(|&(x, y)| rgb(&certificate, x, y) == [0xff, 0xff, 0xff])
            .count();
        assert_eq!(white_outside, 0);
    }

    #[test]
    fn test_png_encoding_and_save() {
        let certificate = render(&request("Jane Doe", 100), 80).unwrap();
        let png = certificate.to_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

        let dir = tempfile::tempdir().unwrap();
        let path = certificate.save(dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap(),
            "Jane_Doe_Adware_Assessment_Certificate.png"
        );
        assert_eq!(fs::read(&path).unwrap(), png);
    }
}
