//! HTML skeleton of the article.

use crate::compile::{group, GroupEntry};
use crate::error::Result;
use crate::model::{Article, Component, Page};

use super::options::RenderOptions;

/// Render the complete HTML document.
pub fn to_html(article: &Article, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("  <meta charset=\"UTF-8\">\n");
    output.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    output.push_str(&format!(
        "  <title>{}</title>\n",
        escape_text(options.title_for(&article.title))
    ));
    output.push_str(&format!(
        "  <link rel=\"stylesheet\" href=\"{}\">\n",
        escape_attr(&options.stylesheet_href)
    ));
    output.push_str("</head>\n");
    output.push_str("<body>\n");
    if let Some(class) = &options.scroller_class {
        output.push_str(&format!("  <div class=\"{}\">\n", escape_attr(class)));
    }

    for page in &article.pages {
        output.push_str(&page_html(page, options)?);
    }

    if options.scroller_class.is_some() {
        output.push_str("  </div>\n");
    }
    for script in &options.library_scripts {
        output.push_str(&format!("  <script src=\"{}\"></script>\n", escape_attr(script)));
    }
    output.push_str(&format!(
        "  <script src=\"{}\"></script>\n",
        escape_attr(&options.script_href)
    ));
    output.push_str("</body>\n");
    output.push_str("</html>\n");

    Ok(output)
}

/// Render one `<section>` with a wrapper per occupied slot.
pub fn page_html(page: &Page, options: &RenderOptions) -> Result<String> {
    let groups = group(page)?;
    let page_id = escape_attr(&page.id);
    let mut output = format!("    <section id=\"page-{}\">\n", page_id);

    for (position, entries) in groups.iter() {
        output.push_str(&format!("      <div id=\"page-{}-{}\">\n", page_id, position));
        let class = format!("page-{}-{}-component", page_id, position);
        for entry in entries {
            output.push_str("        ");
            output.push_str(&component_html(entry, &class, options));
            output.push('\n');
        }
        output.push_str("      </div>\n");
    }

    output.push_str("    </section>\n");
    Ok(output)
}

fn component_html(entry: &GroupEntry<'_>, class: &str, options: &RenderOptions) -> String {
    let component = entry.component;
    if component.is_image() {
        image_html(component, class, entry.frame_index == 0, options)
    } else {
        format!(
            "<div class=\"{}\" id=\"{}\">{}</div>",
            class,
            escape_attr(&component.dom_id()),
            component.content_html.as_deref().unwrap_or_default()
        )
    }
}

fn image_html(component: &Component, class: &str, first_frame: bool, options: &RenderOptions) -> String {
    let class = if first_frame {
        format!("{} first-image", class)
    } else {
        class.to_string()
    };
    let image = component.image.as_ref();
    let data = image.and_then(|img| img.data.as_deref()).unwrap_or_default();

    let mut output = format!(
        "<figure class=\"{}\" id=\"{}\"><img src=\"{}\" alt=\"Image\" />",
        class,
        escape_attr(&component.dom_id()),
        escape_attr(&options.image_src(data))
    );
    if let Some(caption) = image
        .and_then(|img| img.caption.as_deref())
        .filter(|c| !c.is_empty())
    {
        output.push_str(&format!("<figcaption>{}</figcaption>", escape_text(caption)));
    }
    output.push_str("</figure>");
    output
}

/// Escape text for use between tags.
pub(crate) fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text for use inside a double-quoted attribute.
pub(crate) fn escape_attr(text: &str) -> String {
    escape_text(text)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
