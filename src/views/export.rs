use maud::{html, Markup};
use rust_i18n::t;

use crate::{api::PdfPreview, names, session::Identity};

pub fn export(_identity: Identity, locale: &str) -> Markup {
    html! {
        h1 { (t!("export.title", locale = locale)) }

        form hx-post=(names::PDF_PREVIEW_URL)
             hx-target="#preview-area"
             hx-swap="innerHTML"
             hx-encoding="multipart/form-data" {
            label {
                (t!("export.upload_label", locale = locale))
                input type="file" name="file" accept="application/pdf" required;
            }
            button type="submit" { (t!("export.submit", locale = locale)) }
        }

        div #preview-area {}
    }
}

/// Page previews returned by the platform, swapped under the upload form.
pub fn previews(preview: &PdfPreview, locale: &str) -> Markup {
    html! {
        @if preview.previews.is_empty() {
            p { (t!("export.empty", locale = locale)) }
        } @else {
            p { (t!("export.total_pages", locale = locale, count = preview.total_pages)) }
            div.preview-grid {
                @for (index, image) in preview.previews.iter().enumerate() {
                    figure {
                        img src=(image) alt=(format!("page {}", index + 1));
                        figcaption { (index + 1) }
                    }
                }
            }
        }
    }
}
