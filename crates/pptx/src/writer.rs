//! OOXML document writer.
//!
//! [`PptxDocument`] records shapes per slide and serializes the whole
//! package in one pass: fixed parts from [`crate::parts`], slide XML built
//! with `quick_xml`, all zipped into a `.pptx` byte buffer.

use std::io::{Cursor, Write};

use log::debug;
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use deck_core::document::{Align, Document, SlideId, TableGrid, TextBlock};
use deck_core::error::{Error, Result};
use deck_core::geometry::Rect;
use deck_core::theme::{Rgb, Theme};

use crate::parts::{self, emu, NS_A, NS_P, NS_R};

/// The single typeface embedded in run properties.
const TYPEFACE: &str = "Arial";

enum Shape {
    Text { rect: Rect, block: TextBlock },
    Table { rect: Rect, grid: TableGrid },
    /// `media` is a 0-based index into the document media list.
    Picture { rect: Rect, media: usize },
}

#[derive(Default)]
struct Slide {
    shapes: Vec<Shape>,
}

/// In-memory presentation that serializes to a PPTX package.
pub struct PptxDocument {
    background: Rgb,
    slides: Vec<Slide>,
    media: Vec<Vec<u8>>,
}

impl PptxDocument {
    pub fn new() -> Self {
        Self {
            background: Theme::default().background,
            slides: Vec::new(),
            media: Vec::new(),
        }
    }

    /// 1-based media part numbers referenced by a slide, in shape order.
    fn media_ids(&self, slide: &Slide) -> Vec<usize> {
        slide
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Picture { media, .. } => Some(media + 1),
                _ => None,
            })
            .collect()
    }

    fn slide_xml(&self, slide: &Slide) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

        let bg_hex = self.background.to_hex();
        writer
            .create_element("p:sld")
            .with_attribute(("xmlns:a", NS_A))
            .with_attribute(("xmlns:r", NS_R))
            .with_attribute(("xmlns:p", NS_P))
            .write_inner_content(|w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                w.create_element("p:cSld").write_inner_content(
                    |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                        write_background(w, &bg_hex)?;
                        w.create_element("p:spTree").write_inner_content(
                            |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                write_group_header(w)?;
                                // Shape id 1 is the group; shapes count up from 2.
                                let mut next_id = 2;
                                let mut picture_index = 0;
                                for shape in &slide.shapes {
                                    match shape {
                                        Shape::Text { rect, block } => {
                                            write_text_box(w, next_id, *rect, block)?;
                                        }
                                        Shape::Table { rect, grid } => {
                                            write_table(w, next_id, *rect, grid)?;
                                        }
                                        Shape::Picture { rect, .. } => {
                                            let rid = format!("rId{}", picture_index + 2);
                                            picture_index += 1;
                                            write_picture(w, next_id, *rect, &rid)?;
                                        }
                                    }
                                    next_id += 1;
                                }
                                Ok(())
                            },
                        )?;
                        Ok(())
                    },
                )?;
                w.create_element("p:clrMapOvr").write_inner_content(
                    |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                        w.create_element("a:masterClrMapping").write_empty()?;
                        Ok(())
                    },
                )?;
                Ok(())
            })?;

        Ok(writer.into_inner())
    }
}

impl Default for PptxDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for PptxDocument {
    fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    fn add_slide(&mut self) -> SlideId {
        self.slides.push(Slide::default());
        self.slides.len() - 1
    }

    fn add_text_box(&mut self, slide: SlideId, rect: Rect, block: TextBlock) {
        self.slides[slide].shapes.push(Shape::Text { rect, block });
    }

    fn add_table(&mut self, slide: SlideId, rect: Rect, grid: TableGrid) {
        self.slides[slide].shapes.push(Shape::Table { rect, grid });
    }

    fn add_picture(&mut self, slide: SlideId, rect: Rect, png: Vec<u8>) {
        self.media.push(png);
        let media = self.media.len() - 1;
        self.slides[slide].shapes.push(Shape::Picture { rect, media });
    }

    fn serialize(&self) -> Result<Vec<u8>> {
        debug!(
            "serializing package: {} slides, {} media parts",
            self.slides.len(),
            self.media.len()
        );

        let bg_hex = self.background.to_hex();
        let n = self.slides.len();
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        put(&mut zip, "[Content_Types].xml", parts::content_types_xml(n).as_bytes())?;
        put(&mut zip, "_rels/.rels", parts::root_rels_xml().as_bytes())?;
        put(&mut zip, "ppt/presentation.xml", parts::presentation_xml(n).as_bytes())?;
        put(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            parts::presentation_rels_xml(n).as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            parts::slide_master_xml(&bg_hex).as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::slide_master_rels_xml().as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            parts::slide_layout_xml(&bg_hex).as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::slide_layout_rels_xml().as_bytes(),
        )?;
        put(&mut zip, "ppt/theme/theme1.xml", parts::theme_xml().as_bytes())?;

        for (i, slide) in self.slides.iter().enumerate() {
            let xml = self
                .slide_xml(slide)
                .map_err(|e| Error::DocumentWrite(format!("slide {}: {e}", i + 1)))?;
            put(&mut zip, &format!("ppt/slides/slide{}.xml", i + 1), &xml)?;
            put(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
                parts::slide_rels_xml(&self.media_ids(slide)).as_bytes(),
            )?;
        }

        for (i, png) in self.media.iter().enumerate() {
            put(&mut zip, &format!("ppt/media/image{}.png", i + 1), png)?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| Error::DocumentWrite(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

fn put(zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, bytes: &[u8]) -> Result<()> {
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(name, options)
        .map_err(|e| Error::DocumentWrite(format!("{name}: {e}")))?;
    zip.write_all(bytes)
        .map_err(|e| Error::DocumentWrite(format!("{name}: {e}")))?;
    Ok(())
}

fn write_background(w: &mut Writer<Vec<u8>>, bg_hex: &str) -> quick_xml::Result<()> {
    w.create_element("p:bg").write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            w.create_element("p:bgPr").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    write_solid_fill(w, bg_hex)?;
                    w.create_element("a:effectLst").write_empty()?;
                    Ok(())
                },
            )?;
            Ok(())
        },
    )?;
    Ok(())
}

fn write_group_header(w: &mut Writer<Vec<u8>>) -> quick_xml::Result<()> {
    w.create_element("p:nvGrpSpPr").write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            w.create_element("p:cNvPr")
                .with_attribute(("id", "1"))
                .with_attribute(("name", ""))
                .write_empty()?;
            w.create_element("p:cNvGrpSpPr").write_empty()?;
            w.create_element("p:nvPr").write_empty()?;
            Ok(())
        },
    )?;
    w.create_element("p:grpSpPr").write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            w.create_element("a:xfrm").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    w.create_element("a:off")
                        .with_attribute(("x", "0"))
                        .with_attribute(("y", "0"))
                        .write_empty()?;
                    w.create_element("a:ext")
                        .with_attribute(("cx", "0"))
                        .with_attribute(("cy", "0"))
                        .write_empty()?;
                    w.create_element("a:chOff")
                        .with_attribute(("x", "0"))
                        .with_attribute(("y", "0"))
                        .write_empty()?;
                    w.create_element("a:chExt")
                        .with_attribute(("cx", "0"))
                        .with_attribute(("cy", "0"))
                        .write_empty()?;
                    Ok(())
                },
            )?;
            Ok(())
        },
    )?;
    Ok(())
}

fn write_solid_fill(w: &mut Writer<Vec<u8>>, hex: &str) -> quick_xml::Result<()> {
    w.create_element("a:solidFill").write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            w.create_element("a:srgbClr")
                .with_attribute(("val", hex))
                .write_empty()?;
            Ok(())
        },
    )?;
    Ok(())
}

fn write_xfrm(w: &mut Writer<Vec<u8>>, tag: &str, rect: Rect) -> quick_xml::Result<()> {
    let x = emu(rect.left).to_string();
    let y = emu(rect.top).to_string();
    let cx = emu(rect.width).to_string();
    let cy = emu(rect.height).to_string();
    w.create_element(tag).write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            w.create_element("a:off")
                .with_attribute(("x", x.as_str()))
                .with_attribute(("y", y.as_str()))
                .write_empty()?;
            w.create_element("a:ext")
                .with_attribute(("cx", cx.as_str()))
                .with_attribute(("cy", cy.as_str()))
                .write_empty()?;
            Ok(())
        },
    )?;
    Ok(())
}

/// Run properties shared by text-box and table-cell runs.
fn write_run(
    w: &mut Writer<Vec<u8>>,
    text: &str,
    size_pt: u32,
    bold: bool,
    color: Rgb,
) -> quick_xml::Result<()> {
    let sz = (size_pt * 100).to_string();
    let hex = color.to_hex();
    w.create_element("a:r").write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            let mut rpr = w
                .create_element("a:rPr")
                .with_attribute(("lang", "en-US"))
                .with_attribute(("sz", sz.as_str()));
            if bold {
                rpr = rpr.with_attribute(("b", "1"));
            }
            rpr.with_attribute(("dirty", "0")).write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    write_solid_fill(w, &hex)?;
                    w.create_element("a:latin")
                        .with_attribute(("typeface", TYPEFACE))
                        .write_empty()?;
                    Ok(())
                },
            )?;
            w.create_element("a:t")
                .write_text_content(BytesText::new(text))?;
            Ok(())
        },
    )?;
    Ok(())
}

fn write_text_box(
    w: &mut Writer<Vec<u8>>,
    id: usize,
    rect: Rect,
    block: &TextBlock,
) -> quick_xml::Result<()> {
    let id_s = id.to_string();
    let name = format!("TextBox {id}");
    w.create_element("p:sp").write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            w.create_element("p:nvSpPr").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    w.create_element("p:cNvPr")
                        .with_attribute(("id", id_s.as_str()))
                        .with_attribute(("name", name.as_str()))
                        .write_empty()?;
                    w.create_element("p:cNvSpPr")
                        .with_attribute(("txBox", "1"))
                        .write_empty()?;
                    w.create_element("p:nvPr").write_empty()?;
                    Ok(())
                },
            )?;
            w.create_element("p:spPr").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    write_xfrm(w, "a:xfrm", rect)?;
                    w.create_element("a:prstGeom")
                        .with_attribute(("prst", "rect"))
                        .write_inner_content(
                            |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                w.create_element("a:avLst").write_empty()?;
                                Ok(())
                            },
                        )?;
                    w.create_element("a:noFill").write_empty()?;
                    if let Some(outline) = block.outline {
                        let hex = outline.to_hex();
                        w.create_element("a:ln")
                            .with_attribute(("w", "12700"))
                            .write_inner_content(
                                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                    write_solid_fill(w, &hex)
                                },
                            )?;
                    }
                    Ok(())
                },
            )?;
            w.create_element("p:txBody").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    w.create_element("a:bodyPr")
                        .with_attribute(("wrap", "square"))
                        .write_inner_content(
                            |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                w.create_element("a:normAutofit").write_empty()?;
                                Ok(())
                            },
                        )?;
                    w.create_element("a:lstStyle").write_empty()?;
                    if block.paragraphs.is_empty() {
                        w.create_element("a:p").write_empty()?;
                    }
                    for para in &block.paragraphs {
                        let algn = match para.align {
                            Align::Left => "l",
                            Align::Center => "ctr",
                        };
                        // Embedded newlines become separate paragraphs.
                        for line in para.text.split('\n') {
                            w.create_element("a:p").write_inner_content(
                                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                    w.create_element("a:pPr")
                                        .with_attribute(("algn", algn))
                                        .write_empty()?;
                                    write_run(w, line, para.size_pt, para.bold, para.color)?;
                                    Ok(())
                                },
                            )?;
                        }
                    }
                    Ok(())
                },
            )?;
            Ok(())
        },
    )?;
    Ok(())
}

fn write_table(
    w: &mut Writer<Vec<u8>>,
    id: usize,
    rect: Rect,
    grid: &TableGrid,
) -> quick_xml::Result<()> {
    let id_s = id.to_string();
    let name = format!("Table {id}");
    w.create_element("p:graphicFrame").write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            w.create_element("p:nvGraphicFramePr").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    w.create_element("p:cNvPr")
                        .with_attribute(("id", id_s.as_str()))
                        .with_attribute(("name", name.as_str()))
                        .write_empty()?;
                    w.create_element("p:cNvGraphicFramePr").write_empty()?;
                    w.create_element("p:nvPr").write_empty()?;
                    Ok(())
                },
            )?;
            write_xfrm(w, "p:xfrm", rect)?;
            w.create_element("a:graphic").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    w.create_element("a:graphicData")
                        .with_attribute((
                            "uri",
                            "http://schemas.openxmlformats.org/drawingml/2006/table",
                        ))
                        .write_inner_content(
                            |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                write_tbl(w, rect, grid)
                            },
                        )?;
                    Ok(())
                },
            )?;
            Ok(())
        },
    )?;
    Ok(())
}

fn write_tbl(w: &mut Writer<Vec<u8>>, rect: Rect, grid: &TableGrid) -> quick_xml::Result<()> {
    let columns = grid.columns.max(1) as i64;
    let rows = grid.rows.len().max(1) as i64;
    let total_w = emu(rect.width);
    let col_w = total_w / columns;
    let row_h = (emu(rect.height) / rows).to_string();

    w.create_element("a:tbl").write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            w.create_element("a:tblPr")
                .with_attribute(("firstRow", "1"))
                .write_empty()?;
            w.create_element("a:tblGrid").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    for c in 0..columns {
                        // Last column absorbs the division remainder.
                        let width = if c == columns - 1 {
                            total_w - col_w * (columns - 1)
                        } else {
                            col_w
                        };
                        let width = width.to_string();
                        w.create_element("a:gridCol")
                            .with_attribute(("w", width.as_str()))
                            .write_empty()?;
                    }
                    Ok(())
                },
            )?;
            for row in &grid.rows {
                w.create_element("a:tr")
                    .with_attribute(("h", row_h.as_str()))
                    .write_inner_content(
                        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                            for cell in row {
                                w.create_element("a:tc").write_inner_content(
                                    |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                        w.create_element("a:txBody").write_inner_content(
                                            |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                                w.create_element("a:bodyPr").write_empty()?;
                                                w.create_element("a:lstStyle").write_empty()?;
                                                w.create_element("a:p").write_inner_content(
                                                    |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                                        write_run(
                                                            w,
                                                            &cell.text,
                                                            cell.size_pt,
                                                            cell.bold,
                                                            cell.color,
                                                        )
                                                    },
                                                )?;
                                                Ok(())
                                            },
                                        )?;
                                        w.create_element("a:tcPr").write_inner_content(
                                            |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                                if let Some(fill) = cell.fill {
                                                    write_solid_fill(w, &fill.to_hex())?;
                                                }
                                                Ok(())
                                            },
                                        )?;
                                        Ok(())
                                    },
                                )?;
                            }
                            Ok(())
                        },
                    )?;
            }
            Ok(())
        },
    )?;
    Ok(())
}

fn write_picture(
    w: &mut Writer<Vec<u8>>,
    id: usize,
    rect: Rect,
    rid: &str,
) -> quick_xml::Result<()> {
    let id_s = id.to_string();
    let name = format!("Picture {id}");
    w.create_element("p:pic").write_inner_content(
        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
            w.create_element("p:nvPicPr").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    w.create_element("p:cNvPr")
                        .with_attribute(("id", id_s.as_str()))
                        .with_attribute(("name", name.as_str()))
                        .write_empty()?;
                    w.create_element("p:cNvPicPr").write_empty()?;
                    w.create_element("p:nvPr").write_empty()?;
                    Ok(())
                },
            )?;
            w.create_element("p:blipFill").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    w.create_element("a:blip")
                        .with_attribute(("r:embed", rid))
                        .write_empty()?;
                    w.create_element("a:stretch").write_inner_content(
                        |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                            w.create_element("a:fillRect").write_empty()?;
                            Ok(())
                        },
                    )?;
                    Ok(())
                },
            )?;
            w.create_element("p:spPr").write_inner_content(
                |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                    write_xfrm(w, "a:xfrm", rect)?;
                    w.create_element("a:prstGeom")
                        .with_attribute(("prst", "rect"))
                        .write_inner_content(
                            |w: &mut Writer<Vec<u8>>| -> quick_xml::Result<()> {
                                w.create_element("a:avLst").write_empty()?;
                                Ok(())
                            },
                        )?;
                    Ok(())
                },
            )?;
            Ok(())
        },
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::document::{Cell, Paragraph};
    use std::io::Read;

    fn read_part(package: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(package.to_vec())).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        out
    }

    fn part_names(package: &[u8]) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(package.to_vec())).unwrap();
        archive.file_names().map(String::from).collect()
    }

    fn text_block(text: &str) -> TextBlock {
        TextBlock::new(vec![Paragraph::new(text, 16, Rgb::WHITE)])
    }

    #[test]
    fn package_contains_required_parts() {
        let mut doc = PptxDocument::new();
        let s1 = doc.add_slide();
        doc.add_text_box(s1, Rect::new(0.5, 0.5, 4.0, 1.0), text_block("Hello"));
        doc.add_slide();
        let bytes = doc.serialize().unwrap();

        let names = part_names(&bytes);
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/slides/slide2.xml",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn slide_text_is_escaped() {
        let mut doc = PptxDocument::new();
        let s = doc.add_slide();
        doc.add_text_box(s, Rect::new(0.5, 0.5, 4.0, 1.0), text_block("Q&A <review>"));
        let bytes = doc.serialize().unwrap();

        let xml = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(xml.contains("Q&amp;A &lt;review&gt;"));
        assert!(!xml.contains("<review>"));
    }

    #[test]
    fn newlines_split_into_paragraphs() {
        let mut doc = PptxDocument::new();
        let s = doc.add_slide();
        doc.add_text_box(s, Rect::new(0.5, 0.5, 6.0, 3.0), text_block("one\ntwo\nthree"));
        let bytes = doc.serialize().unwrap();

        let xml = read_part(&bytes, "ppt/slides/slide1.xml");
        assert_eq!(xml.matches("<a:p>").count(), 3);
    }

    #[test]
    fn pictures_become_media_parts_with_relationships() {
        let png = vec![0x89, b'P', b'N', b'G', 1, 2, 3];
        let mut doc = PptxDocument::new();
        let s1 = doc.add_slide();
        let s2 = doc.add_slide();
        doc.add_picture(s1, Rect::new(1.0, 1.0, 4.0, 3.0), png.clone());
        doc.add_picture(s2, Rect::new(1.0, 1.0, 4.0, 3.0), vec![9, 9]);
        let bytes = doc.serialize().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        let mut stored = Vec::new();
        archive
            .by_name("ppt/media/image1.png")
            .unwrap()
            .read_to_end(&mut stored)
            .unwrap();
        assert_eq!(stored, png);

        // Second slide's picture points at the second media part.
        let rels = read_part(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(rels.contains("Id=\"rId2\""));
        assert!(rels.contains("Target=\"../media/image2.png\""));
        let xml = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(xml.contains("r:embed=\"rId2\""));
    }

    #[test]
    fn table_rows_and_fills_are_emitted() {
        let cell = |text: &str, fill: Option<Rgb>| Cell {
            text: text.into(),
            size_pt: 12,
            bold: false,
            color: Rgb::WHITE,
            fill,
        };
        let grid = TableGrid {
            columns: 2,
            rows: vec![
                vec![cell("H1", Some(Rgb(0x44, 0x54, 0x6A))), cell("H2", Some(Rgb(0x44, 0x54, 0x6A)))],
                vec![cell("a", Some(Rgb(0x2A, 0x39, 0x50))), cell("b", Some(Rgb(0x2A, 0x39, 0x50)))],
                vec![cell("c", None), cell("d", None)],
            ],
        };
        let mut doc = PptxDocument::new();
        let s = doc.add_slide();
        doc.add_table(s, Rect::new(1.0, 1.5, 8.0, 3.0), grid);
        let bytes = doc.serialize().unwrap();

        let xml = read_part(&bytes, "ppt/slides/slide1.xml");
        assert_eq!(xml.matches("<a:tr ").count(), 3);
        assert_eq!(xml.matches("<a:gridCol ").count(), 2);
        assert!(xml.contains("val=\"2A3950\""));
    }

    #[test]
    fn background_color_reaches_master_and_slides() {
        let mut doc = PptxDocument::new();
        doc.set_background(Rgb(0x10, 0x20, 0x30));
        doc.add_slide();
        let bytes = doc.serialize().unwrap();

        let master = read_part(&bytes, "ppt/slideMasters/slideMaster1.xml");
        assert!(master.contains("val=\"102030\""));
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains("val=\"102030\""));
    }

    #[test]
    fn every_run_carries_the_typeface() {
        let cell = Cell {
            text: "x".into(),
            size_pt: 12,
            bold: false,
            color: Rgb::WHITE,
            fill: None,
        };
        let mut doc = PptxDocument::new();
        let s = doc.add_slide();
        doc.add_text_box(s, Rect::new(0.5, 0.5, 4.0, 1.0), text_block("Hello"));
        doc.add_table(
            s,
            Rect::new(1.0, 2.0, 4.0, 1.0),
            TableGrid {
                columns: 1,
                rows: vec![vec![cell]],
            },
        );
        let bytes = doc.serialize().unwrap();

        let xml = read_part(&bytes, "ppt/slides/slide1.xml");
        // One run in the text box, one in the table cell.
        assert_eq!(xml.matches("typeface=\"Arial\"").count(), 2);
    }

    #[test]
    fn title_outline_appears_when_set() {
        let mut doc = PptxDocument::new();
        let s = doc.add_slide();
        let block = text_block("Title").outlined(Rgb(0x44, 0x54, 0x6A));
        doc.add_text_box(s, Rect::new(0.5, 0.3, 15.0, 0.8), block);
        let bytes = doc.serialize().unwrap();

        let xml = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(xml.contains("<a:ln w=\"12700\">"));
        assert!(xml.contains("val=\"44546A\""));
    }
}
