//! Renders a report layout to PDF bytes with printpdf

use crate::error::{Result, SkillScopeError};
use crate::report::layout::{Color, DrawOp, ReportLayout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::report::metrics::FontStyle;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
};

const MM_TO_PT: f64 = 72.0 / 25.4;

// printpdf wants f32 units; the layout keeps f64 for exact arithmetic
fn mm(value: f64) -> Mm {
    Mm(value as f32)
}

/// Write every page of the layout into a fresh PDF document
pub fn write_pdf(layout: &ReportLayout) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Career Analysis Report",
        mm(PAGE_WIDTH_MM),
        mm(PAGE_HEIGHT_MM),
        "Content",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| SkillScopeError::Report(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| SkillScopeError::Report(e.to_string()))?;

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(mm(PAGE_WIDTH_MM), mm(PAGE_HEIGHT_MM), "Content");
            doc.get_page(page_index).get_layer(layer_index)
        };
        for op in &page.ops {
            draw(&layer, op, &regular, &bold);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| SkillScopeError::Report(e.to_string()))
}

fn draw(layer: &PdfLayerReference, op: &DrawOp, regular: &IndirectFontRef, bold: &IndirectFontRef) {
    match op {
        DrawOp::Text {
            x,
            y,
            size,
            style,
            color,
            content,
        } => {
            let font = match style {
                FontStyle::Regular => regular,
                FontStyle::Bold => bold,
            };
            layer.set_fill_color(pdf_color(*color));
            layer.use_text(
                content.as_str(),
                *size as f32,
                mm(*x),
                mm(PAGE_HEIGHT_MM - y),
                font,
            );
        }
        DrawOp::Line {
            from,
            to,
            width,
            color,
        } => {
            layer.set_outline_color(pdf_color(*color));
            layer.set_outline_thickness((width * MM_TO_PT) as f32);
            layer.add_line(Line {
                points: vec![
                    (Point::new(mm(from.0), mm(PAGE_HEIGHT_MM - from.1)), false),
                    (Point::new(mm(to.0), mm(PAGE_HEIGHT_MM - to.1)), false),
                ],
                is_closed: false,
            });
        }
        DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            let top = PAGE_HEIGHT_MM - y;
            let bottom = PAGE_HEIGHT_MM - y - height;
            layer.set_fill_color(pdf_color(*color));
            layer.add_polygon(Polygon {
                rings: vec![vec![
                    (Point::new(mm(*x), mm(top)), false),
                    (Point::new(mm(x + width), mm(top)), false),
                    (Point::new(mm(x + width), mm(bottom)), false),
                    (Point::new(mm(*x), mm(bottom)), false),
                ]],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
        }
    }
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(printpdf::Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisResult;
    use crate::report::layout::build_layout;

    #[test]
    fn test_write_pdf_produces_pdf_bytes() {
        let layout = build_layout(&AnalysisResult::default(), "1/15/2025");
        let bytes = write_pdf(&layout).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_multi_page_layout_renders() {
        let mut result = AnalysisResult::default();
        for i in 1..=80 {
            result.role_matches.insert(format!("Role {i:03}"), 50.0);
        }
        let layout = build_layout(&result, "1/15/2025");
        assert!(layout.page_count() > 1);

        let bytes = write_pdf(&layout).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }
}
