//! End-to-end checks through the public facade: markup in, span tree out,
//! markup back again, with templates and permission policies in the loop.

use spanmark::{
    AllowAll, Arguments, ClickAction, Color, DenyAll, Property, Renderer, Style, Value, parse,
};

#[test]
fn plain_text_is_untouched() {
    let node = parse("just some text", &AllowAll);
    assert!(node.is_plain());
    assert_eq!(node.to_plain(), "just some text");
    assert_eq!(node.to_markup(false), "just some text");
}

#[test]
fn nested_spans_carry_color_and_style() {
    let node = parse("[Hello [world](green,underline)](blue)", &AllowAll);
    assert_eq!(node.color(), Some(Color::Blue));
    assert_eq!(node.content(), "Hello ");
    assert_eq!(node.to_plain(), "Hello world");

    let children = node.children();
    assert_eq!(children.len(), 1);

    let inner = &children[0];
    assert_eq!(inner.content(), "world");
    assert_eq!(inner.color(), Some(Color::Green));
    assert!(inner.style().contains(Style::UNDERLINE));
}

#[test]
fn url_property_becomes_click_action() {
    let node = parse(
        "[Google: [click here](yellow,underline,https://google.com)](green)",
        &AllowAll,
    );
    assert_eq!(node.color(), Some(Color::Green));
    assert_eq!(node.content(), "Google: ");

    let link = &node.children()[0];
    assert_eq!(link.to_plain(), "click here");
    assert_eq!(link.color(), Some(Color::Yellow));
    assert!(link.style().contains(Style::UNDERLINE));
    match link.click() {
        Some(ClickAction::OpenUrl(url)) => assert_eq!(url.as_str(), "https://google.com/"),
        other => panic!("expected an open-url action, got {other:?}"),
    }
}

#[test]
fn malformed_markup_keeps_every_character() {
    for input in ["a [b", "a [b](", "a [b](red", "[]", "a ] b", "([)]"] {
        let node = parse(input, &AllowAll);
        assert_eq!(node.to_plain(), input, "input {input:?}");
    }
}

#[test]
fn round_trip_reproduces_source() {
    for source in [
        "[Hello [world](green,underline)](blue)",
        "[go](/spawn)",
        "[pick](//msg)",
        "[site](https://example.com/)",
        "[note](some hover text)",
        "plain",
    ] {
        let node = parse(source, &AllowAll);
        assert_eq!(node.to_markup(false), source);
    }
}

#[test]
fn property_tokens_are_trimmed() {
    // Surrounding whitespace is not part of a token, so it does not
    // survive serialization; the trees are still equivalent.
    let node = parse("[pick](//msg )", &AllowAll);
    assert_eq!(
        node.click(),
        Some(&ClickAction::SuggestCommand("/msg".into()))
    );
    assert_eq!(node.to_markup(false), "[pick](//msg)");
    assert_eq!(parse(&node.to_markup(false), &AllowAll), node);

    let node = parse("[x]( red , bold )", &AllowAll);
    assert_eq!(node.color(), Some(Color::Red));
    assert_eq!(node.to_markup(false), "[x](red,bold)");
}

#[test]
fn deny_all_strips_formatting_but_not_text() {
    let node = parse("[x](red,bold,/kick)", &DenyAll);
    assert_eq!(node.to_plain(), "x");
    assert_eq!(node.color(), None);
    assert!(node.style().is_empty());
    assert!(node.click().is_none());
    assert_eq!(node.to_markup(false), "x");
}

#[test]
fn quoted_tokens_survive_a_round_trip() {
    let node = parse("[x](`a,b`)", &AllowAll);
    assert_eq!(node.to_plain(), "x");
    // `a,b` is a single token, so it lands as hover text.
    assert!(node.hover().is_some());
    assert_eq!(node.to_markup(false), "[x](`a,b`)");
}

#[test]
fn renderer_policy_applies_to_templates_too() {
    let renderer = Renderer::with_permissions(|p: &Property| matches!(p, Property::Color(_)));
    let args = Arguments::new().with("cmd", "/op steve");
    let template = renderer.template("[click]({cmd},red)");
    let node = renderer.render_template(&template, &args);
    assert_eq!(node.to_plain(), "click");
    assert_eq!(node.color(), Some(Color::Red));
    assert!(node.click().is_none());
}

#[test]
fn online_users_template() {
    let users = Value::List(vec![
        Value::Map(vec![("name".to_string(), Value::Text("steve".to_string()))]),
        Value::Map(vec![("name".to_string(), Value::Text("alex".to_string()))]),
    ]);
    let args = Arguments::new().with("users", users);

    let renderer = Renderer::new();
    let template = renderer.template("[Online users: {users:[{name}](green):, }](yellow)");
    let node = renderer.render_template(&template, &args);

    assert_eq!(node.color(), Some(Color::Yellow));
    assert_eq!(node.content(), "Online users: ");
    assert_eq!(node.to_plain(), "Online users: steve, alex");

    let children = node.children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].to_plain(), "steve");
    assert_eq!(children[0].color(), Some(Color::Green));
    assert_eq!(children[1].content(), ", ");
    assert_eq!(children[2].to_plain(), "alex");
    assert_eq!(children[2].color(), Some(Color::Green));
}

#[test]
fn untrusted_values_cannot_inject_markup_arguments() {
    let args = Arguments::new().with("msg", "{secret}");
    let renderer = Renderer::new();
    let template = renderer.template("[{msg}](gray)");
    let node = renderer.render_template(&template, &args);
    assert_eq!(node.to_plain(), "{secret}");
}

#[test]
fn escaped_serialization_embeds_cleanly() {
    let renderer = Renderer::new();
    let node = renderer.render("[a,b](red)");
    let escaped = renderer.write_escaped(&node);
    assert_eq!(escaped, "[`a,b`](red)");
    // A lone child with no surrounding text collapses into its parent.
    let reparsed = renderer.render(&format!("[{escaped}](bold)"));
    assert_eq!(reparsed.to_plain(), "a,b");
    assert_eq!(reparsed.color(), Some(Color::Red));
    assert!(reparsed.style().contains(Style::BOLD));
}
