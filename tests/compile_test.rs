//! Integration tests for grouping, timing, and trigger compilation.

use scrolly::compile::{compile_article, end_length, group, CompileOptions};
use scrolly::error::Error;
use scrolly::model::{Article, Component, Frame, Layout, Page, Position};
use scrolly::sink::MemorySink;
use scrolly::{ArticleParser, ParseOptions, Scrolly};

fn text(id: &str, position: Position, transition: &str) -> Component {
    Component::text(id, position, transition, "<p>x</p>")
}

fn parse(article: Article) -> Article {
    ArticleParser::from_article(article, ParseOptions::default())
        .parse()
        .unwrap()
}

const SCENARIO_A: &str = r#"{
    "articleId": "scenario-a",
    "title": "A",
    "pages": [{
        "id": "001",
        "pinnable": true,
        "layout": {"template": "single"},
        "frames": [{"id": "1", "components": [
            {"id": "001-1-1", "type": "text", "position": "center",
             "animation": {"transition": "fade", "duration": 330, "pin": true},
             "contentHtml": "<h1>Hello</h1>"}
        ]}]
    }]
}"#;

const SCENARIO_B: &str = r#"{
    "articleId": "scenario-b",
    "title": "B",
    "pages": [{
        "id": "001",
        "pinnable": true,
        "layout": {"template": "left-right"},
        "frames": [
            {"id": "1", "components": [
                {"id": "001-1-1", "type": "text", "position": "left",
                 "animation": "fade", "contentHtml": "<p>Intro</p>"},
                {"id": "001-1-2", "type": "image", "position": "right",
                 "animation": "zoom", "image": {"data": "one.png"}},
                {"id": "001-1-3", "type": "image", "position": "right",
                 "animation": "fly-in-right", "image": {"data": "two.png"}}
            ]},
            {"id": "2", "components": [
                {"id": "001-2-1", "type": "image", "position": "right",
                 "animation": "overlap", "image": {"data": "three.png"}}
            ]}
        ]
    }]
}"#;

#[test]
fn test_scenario_a_single_text() {
    let result = Scrolly::new().parse_str(SCENARIO_A).unwrap();

    let css = result.stylesheet().unwrap();
    let rule_start = css.find(".page-001-center-component {").unwrap();
    let rule = &css[rule_start..];
    let rule = &rule[..rule.find('}').unwrap()];
    assert!(rule.contains("max-width: 60%;"));

    let plan = result.plan().unwrap();
    let binding = plan.binding("001-1-1").unwrap();
    assert_eq!(binding.timing.start_length, 0);
    assert_eq!(binding.timing.end_length, 1);

    let js = result.animation_program().unwrap();
    assert!(js.contains("start: () => \"top+=0% top\","));
    assert!(js.contains("end: () => \"+=100%\","));
}

#[test]
fn test_scenario_b_left_right_timing() {
    let result = Scrolly::new().parse_str(SCENARIO_B).unwrap();
    let plan = result.plan().unwrap();
    let page = plan.page("001").unwrap();

    assert_eq!(page.biggest_group_size, 3);
    assert_eq!(page.binding("001-1-1").unwrap().timing.end_length, 3);

    let right: Vec<usize> = ["001-1-2", "001-1-3", "001-2-1"]
        .iter()
        .map(|id| page.binding(id).unwrap().timing.end_length)
        .collect();
    assert_eq!(right, vec![1, 1, 1]);

    let starts: Vec<usize> = ["001-1-2", "001-1-3", "001-2-1"]
        .iter()
        .map(|id| page.binding(id).unwrap().timing.start_length)
        .collect();
    assert_eq!(starts, vec![0, 1, 2]);

    let js = result.animation_program().unwrap();
    assert!(js.contains("end: () => \"+=300%\","));
}

#[test]
fn test_scenario_c_unknown_transition() {
    let json = SCENARIO_B.replace("\"animation\": \"zoom\"", "\"animation\": \"spin\"");
    let result = Scrolly::new().parse_str(&json).unwrap();

    match result.plan() {
        Err(Error::UnknownTransition { component_id, name }) => {
            assert_eq!(component_id, "001-1-2");
            assert_eq!(name, "spin");
        }
        other => panic!("expected UnknownTransition, got {other:?}"),
    }

    let sink = MemorySink::new();
    assert!(result.commit(&sink).is_err());
    assert!(sink.is_empty());
    assert!(result.bundle().is_err());
}

#[test]
fn test_scenario_d_invalid_position() {
    let json = SCENARIO_B.replace("\"position\": \"left\"", "\"position\": \"bottom\"");
    let result = Scrolly::new().parse_str(&json).unwrap();

    match result.plan() {
        Err(Error::InvalidPosition {
            component_id,
            position,
            template,
        }) => {
            assert_eq!(component_id, "001-1-1");
            assert_eq!(position, "bottom");
            assert_eq!(template, "left-right");
        }
        other => panic!("expected InvalidPosition, got {other:?}"),
    }
    assert!(result.stylesheet().is_err());
    assert!(result.html().is_err());
}

#[test]
fn test_grouping_and_timing_properties() {
    // Pages with every combination of slot lengths up to 4.
    for left_len in 0..=4usize {
        for right_len in 0..=4usize {
            let frames = left_len.max(right_len);
            let mut page = Page::new("p", true, Layout::left_right());
            for f in 0..frames {
                let mut frame = Frame::new(format!("{}", f + 1));
                if f < left_len {
                    frame.add_component(text(&format!("p-{}-l", f + 1), Position::Left, "fade"));
                }
                if f < right_len {
                    frame.add_component(text(&format!("p-{}-r", f + 1), Position::Right, "fade"));
                }
                page.add_frame(frame);
            }

            let groups = group(&page).unwrap();
            assert_eq!(groups.component_count(), page.component_count());
            assert_eq!(groups.biggest_group_size(), left_len.max(right_len));
            assert_eq!(groups.biggest_group_size() == 0, page.component_count() == 0);

            let biggest = groups.biggest_group_size();
            for (_, entries) in groups.iter() {
                let n = entries.len();
                for i in 0..n {
                    let end = end_length(i, n, biggest);
                    if i + 1 < n {
                        assert_eq!(end, 1);
                    } else if n == biggest {
                        assert_eq!(end, 1);
                    } else {
                        assert_eq!(end, biggest - (n - 1));
                    }
                    // Every slot finishes with the longest one.
                    if i + 1 == n {
                        assert_eq!(i + end, biggest);
                    }
                }
            }
        }
    }
}

#[test]
fn test_initial_visibility_only_first_frame_of_first_page() {
    let mut article = Article::new("vis", "Visibility");
    for p in 1..=2 {
        let page_id = format!("00{}", p);
        let mut page = Page::new(page_id.clone(), true, Layout::top_bottom());
        for f in 1..=2 {
            page.add_frame(
                Frame::new(f.to_string())
                    .with_component(text(&format!("{page_id}-{f}-1"), Position::Top, "fade"))
                    .with_component(text(&format!("{page_id}-{f}-2"), Position::Bottom, "zoom")),
            );
        }
        article.add_page(page);
    }
    let article = parse(article);
    let plan = compile_article(&article, &CompileOptions::default()).unwrap();

    for page in &plan.pages {
        for binding in &page.bindings {
            let mut segments = binding.component_id.split('-');
            let expected =
                segments.next() == Some("001") && segments.next() == Some("1");
            assert_eq!(
                binding.script.initially_visible, expected,
                "visibility of {}",
                binding.component_id
            );
        }
    }
}

#[test]
fn test_compilation_is_deterministic() {
    let first = scrolly::compile_str(SCENARIO_B).unwrap();
    let second = scrolly::compile_str(SCENARIO_B).unwrap();
    assert_eq!(first.html, second.html);
    assert_eq!(first.stylesheet, second.stylesheet);
    assert_eq!(first.animation_program, second.animation_program);

    let sequential = Scrolly::new()
        .sequential()
        .parse_str(SCENARIO_B)
        .unwrap()
        .bundle()
        .unwrap();
    assert_eq!(first, sequential);
}

#[test]
fn test_pin_step_configuration() {
    let default = Scrolly::new().parse_str(SCENARIO_B).unwrap();
    let pin = default.plan().unwrap().pages[0].pin.clone().unwrap();
    assert_eq!(pin.distance(), 300);

    let halved = Scrolly::new()
        .with_pin_step_percent(50)
        .parse_str(SCENARIO_B)
        .unwrap();
    let js = halved.animation_program().unwrap();
    assert!(js.contains("end: () => \"+=150%\","));
    // Trigger windows keep the full step.
    assert!(js.contains("start: () => \"top+=200% top\","));
}

#[test]
fn test_page_step_override_from_payload() {
    let json = SCENARIO_B.replace("\"pinnable\": true,", "\"pinnable\": true, \"stepPercent\": 60,");
    let result = Scrolly::new().parse_str(&json).unwrap();
    let js = result.animation_program().unwrap();
    assert!(js.contains("start: () => \"top+=120% top\","));
    assert!(js.contains("end: () => \"+=180%\","));
}

#[test]
fn test_static_page_has_no_triggers() {
    let json = SCENARIO_B.replace("\"pinnable\": true", "\"pinnable\": false");
    let result = Scrolly::new().parse_str(&json).unwrap();
    let js = result.animation_program().unwrap();
    assert!(!js.contains("gsap.timeline("));
    assert!(!js.contains("ScrollTrigger.create("));

    let css = result.stylesheet().unwrap();
    assert!(css.contains(".page-001-left-component {\n    position: relative;"));
}
