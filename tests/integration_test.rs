//! Integration tests for docview.
//!
//! Tests document loading, rendering of realistic pages, and view binding.

mod common;

use anyhow::Result;
use common::{CORE_DOC, HUD_DOC, create_docs_dir};
use docview::{DocRegistry, HtmlBuffer, MarkdownRenderer, Pass, Viewer, render};

/// Tests registry loading picks markdown files only, ordered by name.
#[test]
fn test_registry_from_dir_loads_markdown_files() -> Result<()> {
    // Arrange
    let dir = create_docs_dir(&[
        ("as-spawn.md", "# AS-Spawn"),
        ("as-core.md", CORE_DOC),
        ("notes.txt", "not markdown"),
        ("nested/as-hidden.md", "# Hidden"),
    ])?;

    // Act
    let registry = DocRegistry::from_dir(dir.path())?;

    // Assert
    let keys: Vec<&str> = registry.keys().collect();
    assert_eq!(keys, ["as-core", "as-spawn"], "Only top-level .md files, by name");
    assert_eq!(registry.get("as-core"), Some(CORE_DOC));
    assert_eq!(
        registry.document("as-spawn").map(|d| d.title()),
        Some("AS-Spawn")
    );

    Ok(())
}

/// Tests registry loading of an empty directory.
#[test]
fn test_registry_from_empty_dir() -> Result<()> {
    // Arrange
    let dir = create_docs_dir(&[])?;

    // Act
    let registry = DocRegistry::from_dir(dir.path())?;

    // Assert
    assert!(registry.is_empty());

    Ok(())
}

/// Tests a realistic resource page end to end.
#[test]
fn test_render_resource_page() {
    // Arrange
    let renderer = MarkdownRenderer::new();

    // Act
    let html = renderer.render(CORE_DOC);

    // Assert
    assert!(html.contains("<h1>AS-Core</h1>"), "Got: {}", html);
    assert!(html.contains("<h2>Features</h2>"));
    assert!(html.contains(
        "<ul><li><strong>Player Management</strong> - Complete player data handling</li>\n\
         <li><strong>Money System</strong> - Multiple account types</li></ul>"
    ));
    assert!(html.contains(
        "<p>1. Add <code>as-core</code> to your resources folder\n2. Add to <code>server.cfg</code>:</p>"
    ));
    assert!(html.contains(
        "<pre><code class=\"language-cfg\">ensure oxmysql\nensure as-core\n\n# Load centralized configuration\nexec @as-core/convars.cfg</code></pre>"
    ));
    assert!(
        !html.contains("<h1>Load"),
        "Comment lines inside code must not become headers"
    );
    assert!(html.contains(
        "<li><a href=\"https://github.com/overextended/oxmysql\" target=\"_blank\">oxmysql</a></li>"
    ));
}

/// Tests the second list of a page is left without a wrapper.
#[test]
fn test_render_resource_page_single_list_wrapper() {
    // Arrange & Act
    let html = render(CORE_DOC);

    // Assert
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 4);
}

/// Tests code with HTML special characters is escaped exactly once.
#[test]
fn test_render_escapes_code_block() {
    // Arrange & Act
    let html = render(HUD_DOC);

    // Assert
    assert!(html.contains(
        "<pre><code class=\"language-lua\">exports[&#039;as-hud&#039;]:SetVisible(true)\n\
         if speed &gt; 100 and fuel &lt; 0.25 then print(&#039;&lt;low&gt;&#039;) end</code></pre>"
    ), "Got: {}", html);
    assert!(!html.contains("&amp;"), "Nothing should be double escaped");
}

/// Tests applying passes one by one matches the renderer.
#[test]
fn test_pipeline_passes_compose_to_render() {
    // Arrange
    let source = "# Title\n\nSome **text** with `code`.\n\n- [a](b)";
    let mut stash = docview::CodeStash::new();

    // Act
    let mut text = source.to_string();
    for pass in Pass::PIPELINE {
        text = pass.apply(&text, &mut stash);
    }
    let composed = stash.restore(&text);

    // Assert
    assert_eq!(composed, render(source));
    assert_eq!(
        composed,
        "<h1>Title</h1>\n<p>Some <strong>text</strong> with <code>code</code>.</p>\n\
         <ul><li><a href=\"b\" target=\"_blank\">a</a></li></ul>"
    );
}

/// Tests viewer over a loaded registry.
#[test]
fn test_viewer_over_loaded_registry() -> Result<()> {
    // Arrange
    let dir = create_docs_dir(&[("as-core.md", CORE_DOC), ("as-hud.md", HUD_DOC)])?;
    let registry = DocRegistry::from_dir(dir.path())?;
    let mut viewer = Viewer::new(&registry, HtmlBuffer::new());

    // Act
    viewer.select("as-core");
    viewer.select("as-hud");
    let unknown_shown = viewer.select("as-missing");

    // Assert
    assert!(!unknown_shown);
    assert_eq!(viewer.surface().as_str(), render(HUD_DOC));
    assert!(viewer.selectors().iter().all(|s| !s.active));

    Ok(())
}
