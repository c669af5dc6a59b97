//! HTML template set
//!
//! `view.html` and `edit.html` are read once at startup from the templates
//! directory; missing files are fatal. Rendering is plain placeholder
//! substitution: `{{title}}` and `{{body}}`. The view body is pre-rendered
//! HTML from the link renderer and is inserted as-is; the edit body is page
//! text headed for a textarea and is escaped.

use std::io;
use std::path::Path;

use crate::pages::render::RenderedPage;
use crate::pages::store::Page;

pub struct TemplateSet {
    view: String,
    edit: String,
}

impl TemplateSet {
    pub fn load(templates_dir: &Path) -> io::Result<Self> {
        let view = std::fs::read_to_string(templates_dir.join("view.html"))?;
        let edit = std::fs::read_to_string(templates_dir.join("edit.html"))?;
        Ok(Self { view, edit })
    }

    pub fn render_view(&self, page: &RenderedPage) -> String {
        self.view
            .replace("{{title}}", &html_escape::encode_text(&page.title))
            .replace("{{body}}", &page.html_body)
    }

    pub fn render_edit(&self, page: &Page) -> String {
        self.edit
            .replace("{{title}}", &html_escape::encode_text(&page.title))
            .replace("{{body}}", &html_escape::encode_text(&page.body))
    }
}
