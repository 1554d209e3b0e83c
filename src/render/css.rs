//! Layout stylesheet: container, slot, and component rules per page.

use crate::compile::{group, ComponentGroups};
use crate::error::Result;
use crate::model::{Article, Component, LayoutTemplate, Page, Position};

use super::options::RenderOptions;

/// Render the full stylesheet: base stylesheet, scroll container rules,
/// then every page's rules.
pub fn to_stylesheet(article: &Article, options: &RenderOptions) -> Result<String> {
    let mut pages = String::new();
    for page in &article.pages {
        pages.push_str(&page_css(page)?);
    }

    let scroller = options
        .scroller_class
        .as_deref()
        .map(scroller_css)
        .unwrap_or_default();
    let sections: Vec<&str> = [options.base_stylesheet.as_str(), scroller.as_str(), pages.as_str()]
        .iter()
        .map(|section| section.trim())
        .filter(|section| !section.is_empty())
        .collect();
    Ok(sections.join("\n\n"))
}

/// The document stays put and the container scrolls instead.
fn scroller_css(class: &str) -> String {
    let mut css = block(
        "html,\nbody",
        &[("height", "100%"), ("overflow", "hidden")],
    );
    css.push('\n');
    css.push_str(&block(
        &format!(".{}", class),
        &[
            ("height", "100vh"),
            ("overflow-y", "auto"),
            ("overflow-x", "hidden"),
        ],
    ));
    css
}

/// Render the layout rules of one page.
///
/// Unknown templates produce an empty string.
pub fn page_css(page: &Page) -> Result<String> {
    let groups = group(page)?;
    let id = page.id.as_str();
    let layout = &page.layout;
    let mut css = String::new();

    match &layout.template {
        LayoutTemplate::LeftRight => {
            css.push_str(&block(
                &format!("#page-{}", id),
                &[
                    ("display", "flex"),
                    ("justify-content", "space-around"),
                    ("align-items", "center"),
                    ("height", "100vh"),
                    ("padding-left", "40px"),
                    ("padding-right", "40px"),
                    ("max-width", "60%"),
                    ("margin-left", "auto"),
                    ("margin-right", "auto"),
                ],
            ));
            css.push_str(&column_slot(id, "left", layout.left_width(), ("margin-right", "10px")));
            css.push_str(&column_slot(id, "right", layout.right_width(), ("margin-left", "10px")));
        }
        LayoutTemplate::TopBottom => {
            css.push_str(&block(
                &format!("#page-{}", id),
                &[
                    ("display", "flex"),
                    ("flex-direction", "column"),
                    ("justify-content", "center"),
                    ("align-items", "center"),
                    ("height", "100vh"),
                    ("padding-left", "40px"),
                    ("padding-right", "40px"),
                ],
            ));
            css.push_str(&block(
                &format!("#page-{}-top", id),
                &[
                    ("display", "flex"),
                    ("justify-content", "center"),
                    ("align-items", "flex-end"),
                    ("width", "60%"),
                    ("height", layout.top_height()),
                    ("background-color", "transparent"),
                    ("position", "relative"),
                ],
            ));
            css.push_str(&block(
                &format!("#page-{}-bottom", id),
                &[
                    ("display", "flex"),
                    ("justify-content", "center"),
                    ("align-items", "flex-start"),
                    ("width", "60%"),
                    ("height", layout.bottom_height()),
                    ("background-color", "transparent"),
                    ("position", "relative"),
                    ("padding-top", "40px"),
                ],
            ));
        }
        LayoutTemplate::Single => {
            css.push_str(&block(
                &format!("#page-{}", id),
                &[
                    ("display", "flex"),
                    ("justify-content", "center"),
                    ("align-items", "center"),
                    ("height", "100vh"),
                    ("padding-left", "40px"),
                    ("padding-right", "40px"),
                ],
            ));
            css.push_str(&block(
                &format!("#page-{}-center", id),
                &[
                    ("display", "flex"),
                    ("flex-direction", "column"),
                    ("justify-content", "center"),
                    ("align-items", "center"),
                    ("position", "relative"),
                    ("width", "100%"),
                    ("height", "100%"),
                ],
            ));
        }
        LayoutTemplate::Other(name) => {
            log::debug!("Page '{}': no layout rules for template '{}'", id, name);
            return Ok(String::new());
        }
    }

    css.push_str(&component_css(page, &groups));
    css.push('\n');
    Ok(css)
}

/// One component class per occupied slot, shaped by the slot's first component.
fn component_css(page: &Page, groups: &ComponentGroups<'_>) -> String {
    let mut css = String::new();

    for (position, entries) in groups.iter() {
        let Some(first) = entries.first() else {
            continue;
        };
        let class = format!(".page-{}-{}-component", page.id, position);
        let rules = match page.layout.template {
            LayoutTemplate::LeftRight => left_right_component(&class, first.component, page.pinnable),
            LayoutTemplate::TopBottom => {
                top_bottom_component(&class, first.component, position, page.pinnable)
            }
            LayoutTemplate::Single => center_component(&page.id, &class, first.component, page.pinnable),
            LayoutTemplate::Other(_) => String::new(),
        };
        css.push_str(&rules);
    }

    css
}

fn left_right_component(class: &str, component: &Component, pinnable: bool) -> String {
    let placement = placement(pinnable);
    if component.is_text() {
        block(
            class,
            &[
                ("position", placement),
                ("width", "100%"),
                ("max-width", "500px"),
                ("height", "100%"),
                ("text-align", "left"),
                ("opacity", "1"),
                ("z-index", "1"),
                ("background-color", "transparent"),
                ("display", "flex"),
                ("justify-content", "center"),
                ("align-items", "flex-start"),
                ("flex-direction", "column"),
            ],
        )
    } else {
        block(
            class,
            &[
                ("position", placement),
                ("width", "100%"),
                ("height", "100%"),
                ("display", "flex"),
                ("justify-content", "center"),
                ("align-items", "center"),
                ("opacity", "1"),
                ("flex-direction", "column"),
            ],
        )
    }
}

fn top_bottom_component(
    class: &str,
    component: &Component,
    position: Position,
    pinnable: bool,
) -> String {
    let placement = placement(pinnable);
    if component.is_text() {
        block(
            class,
            &[
                ("text-align", "left"),
                ("line-height", "1.5"),
                ("position", placement),
                ("width", "100%"),
                ("height", "100%"),
                ("display", "flex"),
                ("justify-content", "end"),
                ("flex-direction", "column"),
                ("padding-top", "25px"),
            ],
        )
    } else {
        let justify = if position == Position::Bottom {
            "flex-start"
        } else {
            "flex-end"
        };
        block(
            class,
            &[
                ("position", placement),
                ("width", "100%"),
                ("height", "80%"),
                ("display", "flex"),
                ("justify-content", justify),
                ("align-items", "center"),
                ("opacity", "1"),
                ("flex-direction", "column"),
            ],
        )
    }
}

fn center_component(page_id: &str, class: &str, component: &Component, pinnable: bool) -> String {
    let img = format!("{} img", class);

    if !component.is_image() {
        return block(
            class,
            &[
                ("justify-content", "center"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("text-align", "left"),
                ("max-width", "60%"),
            ],
        );
    }

    let fullscreen = component.is_fullscreen_image();
    let mut css = String::new();
    match (pinnable, fullscreen) {
        (true, true) => {
            css.push_str(&block(
                &img,
                &[("width", "100%"), ("height", "100%"), ("object-fit", "cover")],
            ));
            css.push_str(&block(
                class,
                &[
                    ("position", "absolute"),
                    ("justify-content", "center"),
                    ("align-items", "center"),
                    ("display", "flex"),
                ],
            ));
        }
        (true, false) => {
            css.push_str(&block(&img, &[("max-width", "100%"), ("height", "auto")]));
            css.push_str(&block(
                class,
                &[
                    ("position", "absolute"),
                    ("justify-content", "center"),
                    ("align-items", "center"),
                    ("display", "flex"),
                    ("max-width", "60%"),
                ],
            ));
        }
        (false, true) => {
            css.push_str(&block(
                &format!("#page-{}", page_id),
                &[("max-width", "100%"), ("height", "100%"), ("padding", "0px")],
            ));
            css.push_str(&block(
                class,
                &[
                    ("justify-content", "center"),
                    ("align-items", "center"),
                    ("height", "100%"),
                    ("width", "100%"),
                ],
            ));
            css.push_str(&block(
                &img,
                &[("width", "100%"), ("height", "100%"), ("object-fit", "cover")],
            ));
        }
        (false, false) => {
            css.push_str(&block(
                class,
                &[
                    ("justify-content", "center"),
                    ("align-items", "center"),
                    ("max-width", "60%"),
                ],
            ));
            css.push_str(&block(&img, &[("width", "100%"), ("height", "100%")]));
        }
    }
    css
}

/// Pinned pages stack their components on top of each other; static pages
/// lay them out one after another.
fn placement(pinnable: bool) -> &'static str {
    if pinnable {
        "absolute"
    } else {
        "relative"
    }
}

fn column_slot(page_id: &str, side: &str, width: &str, gap: (&str, &str)) -> String {
    block(
        &format!("#page-{}-{}", page_id, side),
        &[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("justify-content", "center"),
            ("align-items", "center"),
            ("position", "relative"),
            ("width", width),
            ("height", "100vh"),
            gap,
        ],
    )
}

fn block(selector: &str, declarations: &[(&str, &str)]) -> String {
    let mut css = format!("{} {{\n", selector);
    for (property, value) in declarations {
        css.push_str(&format!("    {}: {};\n", property, value));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frame, Image, Layout};

    fn single_page(component: Component, pinnable: bool) -> Page {
        let mut page = Page::new("001", pinnable, Layout::single());
        page.add_frame(Frame::new("1").with_component(component));
        page
    }

    #[test]
    fn test_block_format() {
        assert_eq!(
            block("#x", &[("display", "flex")]),
            "#x {\n    display: flex;\n}\n"
        );
    }

    #[test]
    fn test_single_text() {
        let page = single_page(
            Component::text("001-1-1", Position::Center, "fade", "<p>a</p>"),
            true,
        );
        let css = page_css(&page).unwrap();
        assert!(css.contains("#page-001 {\n"));
        assert!(css.contains("#page-001-center {\n"));
        assert!(css.contains(".page-001-center-component {\n"));
        assert!(css.contains("    max-width: 60%;\n"));
    }

    #[test]
    fn test_single_image_variants() {
        let image = Image::new("a.png");
        let pinned_full = single_page(
            Component::image("001-1-1", Position::Center, "fade", image.clone().fullscreen()),
            true,
        );
        let css = page_css(&pinned_full).unwrap();
        assert!(css.contains(".page-001-center-component img {\n    width: 100%;\n    height: 100%;\n    object-fit: cover;\n}"));
        assert!(css.contains("position: absolute"));

        let static_full = single_page(
            Component::image("001-1-1", Position::Center, "fade", image.clone().fullscreen()),
            false,
        );
        let css = page_css(&static_full).unwrap();
        assert!(css.contains("padding: 0px;"));

        let pinned = single_page(
            Component::image("001-1-1", Position::Center, "fade", image),
            true,
        );
        let css = page_css(&pinned).unwrap();
        assert!(css.contains("height: auto;"));
        assert!(css.contains("max-width: 60%;"));
    }

    #[test]
    fn test_left_right_widths_and_types() {
        let mut layout = Layout::left_right();
        layout.width_left = Some("30%".to_string());
        let mut page = Page::new("002", true, layout);
        page.add_frame(
            Frame::new("1")
                .with_component(Component::text("002-1-1", Position::Left, "fade", "<p>a</p>"))
                .with_component(Component::image(
                    "002-1-2",
                    Position::Right,
                    "fade",
                    Image::new("b.png"),
                )),
        );

        let css = page_css(&page).unwrap();
        assert!(css.contains("#page-002-left {\n"));
        assert!(css.contains("    width: 30%;\n"));
        assert!(css.contains("    width: 50%;\n"));
        assert!(css.contains(".page-002-left-component {\n    position: absolute;\n    width: 100%;\n    max-width: 500px;"));
        assert!(css.contains(".page-002-right-component {\n    position: absolute;\n    width: 100%;\n    height: 100%;"));
    }

    #[test]
    fn test_static_pages_flow() {
        let mut page = Page::new("003", false, Layout::top_bottom());
        page.add_frame(
            Frame::new("1")
                .with_component(Component::image("003-1-1", Position::Top, "fade", Image::new("c.png")))
                .with_component(Component::text("003-1-2", Position::Bottom, "fade", "<p>c</p>")),
        );
        let css = page_css(&page).unwrap();
        assert!(!css.contains("position: absolute"));
        assert!(css.contains("justify-content: flex-end;"));
        assert!(css.contains("    height: 20%;\n"));
        assert!(css.contains("    height: 80%;\n"));
    }

    #[test]
    fn test_unknown_template_emits_nothing() {
        let mut page = Page::new("004", true, Layout::new(LayoutTemplate::Other("grid".into())));
        page.add_frame(
            Frame::new("1")
                .with_component(Component::text("004-1-1", Position::Top, "fade", "<p>d</p>")),
        );
        assert_eq!(page_css(&page).unwrap(), "");
    }

    #[test]
    fn test_stylesheet_prepends_base() {
        let mut article = Article::new("a", "T");
        article.add_page(single_page(
            Component::text("001-1-1", Position::Center, "fade", "<p>a</p>"),
            true,
        ));
        let options = RenderOptions::new()
            .with_base_stylesheet("body { margin: 0; }\n")
            .without_scroller();
        let css = to_stylesheet(&article, &options).unwrap();
        assert!(css.starts_with("body { margin: 0; }\n\n#page-001 {"));
        assert!(!css.contains("overflow"));
    }

    #[test]
    fn test_scroller_rules_follow_options() {
        let mut article = Article::new("a", "T");
        article.add_page(single_page(
            Component::text("001-1-1", Position::Center, "fade", "<p>a</p>"),
            true,
        ));
        let options = RenderOptions::new()
            .with_base_stylesheet("")
            .with_scroller_class("story");
        let css = to_stylesheet(&article, &options).unwrap();

        let container = css.find(".story {\n    height: 100vh;").unwrap();
        let page = css.find("#page-001 {").unwrap();
        assert!(container < page);
        assert!(css.starts_with("html,\nbody {\n    height: 100%;\n    overflow: hidden;\n}"));
    }
}
