//! HTML renderer: turns a composed [`Page`] into markup for the DOM
//! frontend.
//!
//! Interactive hooks are plain attributes so the host can wire them with a
//! single delegated listener:
//! - `data-nav="<section>"` on navigation buttons,
//! - `data-action="toggle-lang"` on language buttons,
//! - `class="reveal-on-scroll"` on every section region,
//! - `data-spotlight` on project cards, with a `.spotlight` overlay child.

use crate::content::shared::{self, Icon};
use crate::nav::Section;
use crate::page::Page;

pub const NAV_ATTR: &str = "data-nav";
pub const ACTION_ATTR: &str = "data-action";
pub const TOGGLE_LANG_ACTION: &str = "toggle-lang";
pub const REVEAL_CLASS: &str = "reveal-on-scroll";
pub const REVEALED_CLASS: &str = "reveal-visible";
pub const SPOTLIGHT_ATTR: &str = "data-spotlight";
pub const SPOTLIGHT_CLASS: &str = "spotlight";
pub const PARTICLE_CANVAS_ID: &str = "folio-particles";
pub const CURSOR_DOT_CLASS: &str = "cursor-dot";
pub const CURSOR_OUTLINE_CLASS: &str = "cursor-outline";
/// Body class set while the custom cursor nodes exist.
pub const CURSOR_ACTIVE_CLASS: &str = "custom-cursor";
/// Sidebar parts that only make sense on wide screens.
pub const DESKTOP_ONLY_CLASS: &str = "desktop-only";

/// Page stylesheet injected once by the DOM host.
pub const STYLESHEET: &str = r#"
:root { --neon: #39ff14; --bg: #050505; }
body { margin: 0; background: var(--bg); color: #fff; overflow-x: hidden; }
body.custom-cursor, body.custom-cursor .nav-item { cursor: none; }
.font-fa { font-family: Vazirmatn, Tahoma, sans-serif; }
.font-en { font-family: Inter, system-ui, sans-serif; }
#folio-particles { position: fixed; inset: 0; z-index: 0; pointer-events: none; opacity: 0.3; }
.cursor-dot, .cursor-outline { position: fixed; top: 0; left: 0; z-index: 100; pointer-events: none; border-radius: 50%; transform: translate(-50%, -50%); }
.cursor-dot { width: 8px; height: 8px; background: var(--neon); }
.cursor-outline { width: 40px; height: 40px; border: 2px solid rgba(57, 255, 20, 0.5); }
@media (max-width: 768px) { .cursor-dot, .cursor-outline { display: none; } body.custom-cursor, body.custom-cursor .nav-item { cursor: auto; } }
.layout { position: relative; z-index: 10; display: flex; }
.topbar { display: none; }
@media (max-width: 768px) { .topbar { display: flex; justify-content: space-between; position: fixed; top: 0; left: 0; right: 0; z-index: 40; padding: 1rem; background: rgba(5, 5, 5, 0.8); } .layout { flex-direction: column; padding-top: 4rem; } }
.sidebar { position: sticky; top: 0; height: 100vh; width: 20rem; padding: 2rem; box-sizing: border-box; }
.nav-item { display: flex; gap: 1rem; width: 100%; padding: 1rem; border: 0; border-radius: 1rem; background: transparent; color: #9ca3af; cursor: pointer; }
.nav-item.active { background: rgba(255, 255, 255, 0.05); color: #fff; box-shadow: inset 4px 0 0 var(--neon); }
main { flex: 1; padding: 3rem; max-width: 80rem; }
main > section { margin-bottom: 8rem; }
@media (max-width: 768px) {
  .sidebar { position: fixed; top: auto; bottom: 0; left: 0; right: 0; z-index: 50; height: auto; width: 100%; padding: 0.5rem; background: rgba(10, 10, 10, 0.9); border-top: 1px solid rgba(255, 255, 255, 0.1); }
  .sidebar .desktop-only { display: none; }
  .sidebar nav { display: flex; justify-content: space-around; }
  .nav-item { flex-direction: column; align-items: center; width: auto; padding: 0.5rem; font-size: 0.75rem; }
  .nav-item.active { box-shadow: inset 0 -2px 0 var(--neon); }
  main { padding: 1.5rem 1.5rem 6rem; }
}
.reveal-on-scroll { opacity: 0; transform: translateY(40px); transition: opacity 0.8s ease, transform 0.8s ease; }
.reveal-on-scroll.reveal-visible { opacity: 1; transform: none; }
.ordinal { display: block; color: var(--neon); font-size: 3.75rem; }
.project-card { position: relative; overflow: hidden; background: #0f0f0f; border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 1.5rem; padding: 1.5rem; }
.spotlight { position: absolute; inset: -1px; pointer-events: none; opacity: 0; transition: opacity 0.3s; }
.skill-track { height: 0.5rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.05); overflow: hidden; }
.skill-fill { height: 100%; background: var(--neon); box-shadow: 0 0 15px var(--neon); }
.tag { font-family: monospace; color: #6b7280; margin-inline-end: 0.75rem; }
.contact-card { display: flex; gap: 1rem; padding: 1.5rem; border-radius: 1.5rem; background: #111; color: #fff; text-decoration: none; }
"#;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole page. `is_revealed` lets a re-render keep regions that
/// were already revealed visible.
pub fn render_page(page: &Page, is_revealed: impl Fn(Section) -> bool) -> String {
    let font = page.language.font_class();
    let mut html = String::with_capacity(16 * 1024);
    html.push_str(&format!(r#"<div class="app {font}">"#));
    render_topbar(&mut html, page);
    html.push_str(r#"<div class="layout">"#);
    render_sidebar(&mut html, page);
    html.push_str("<main>");
    for section in Section::ALL {
        let revealed = if is_revealed(section) {
            format!(" {REVEALED_CLASS}")
        } else {
            String::new()
        };
        html.push_str(&format!(
            r#"<section id="{id}" class="{REVEAL_CLASS}{revealed}">"#,
            id = section.id(),
        ));
        match section {
            Section::Home => render_hero(&mut html, page),
            Section::Experience => render_experience(&mut html, page),
            Section::Projects => render_projects(&mut html, page),
            Section::Skills => render_skills(&mut html, page),
            Section::Contact => render_contact(&mut html, page),
        }
        html.push_str("</section>");
    }
    html.push_str("</main></div></div>");
    html
}

fn toggle_button(html: &mut String, label: &str, class: &str) {
    html.push_str(&format!(
        r#"<button class="{class}" {ACTION_ATTR}="{TOGGLE_LANG_ACTION}">{glyph} {label}</button>"#,
        glyph = Icon::Globe.glyph(),
        label = escape_html(label),
    ));
}

fn render_topbar(html: &mut String, page: &Page) {
    html.push_str(&format!(
        r#"<div class="topbar"><span class="brand">{}</span>"#,
        escape_html(shared::BRAND_SHORT)
    ));
    toggle_button(html, page.toggle_short_label, "lang-toggle compact");
    html.push_str("</div>");
}

fn render_sidebar(html: &mut String, page: &Page) {
    html.push_str(r#"<aside class="sidebar">"#);
    html.push_str(&format!(
        r#"<div class="brand {DESKTOP_ONLY_CLASS}"><strong class="font-en">{}</strong><small class="font-en">{}</small></div>"#,
        escape_html(shared::BRAND_HANDLE),
        escape_html(shared::BRAND_TAGLINE),
    ));
    html.push_str("<nav>");
    for item in &page.nav {
        let active = if item.active { " active" } else { "" };
        html.push_str(&format!(
            r#"<button class="nav-item{active}" {NAV_ATTR}="{id}" aria-current="{current}">{label}</button>"#,
            id = item.section.id(),
            current = item.active,
            label = escape_html(item.label),
        ));
    }
    html.push_str("</nav>");
    toggle_button(html, page.toggle_label, &format!("lang-toggle {DESKTOP_ONLY_CLASS}"));
    html.push_str("</aside>");
}

fn section_heading(html: &mut String, page: &Page, section: Section) {
    let ordinal = section
        .ordinal()
        .map(|o| format!(r#"<span class="ordinal">{o}</span> "#))
        .unwrap_or_default();
    html.push_str(&format!(
        "<h2>{ordinal}{}</h2>",
        escape_html(page.heading(section))
    ));
}

fn render_hero(html: &mut String, page: &Page) {
    let hero = &page.content.hero;
    html.push_str(&format!(
        r#"<div class="badge">{}</div>"#,
        escape_html(shared::HERO_BADGE)
    ));
    let title = escape_html(hero.title);
    html.push_str(&format!(
        r#"<h1 class="glitch-text" data-text="{title}">{title}</h1>"#
    ));
    html.push_str(r#"<ul class="roles">"#);
    for role in hero.roles {
        html.push_str(&format!("<li>{}</li>", escape_html(role)));
    }
    html.push_str("</ul>");
    html.push_str(&format!("<p>{}</p>", escape_html(hero.description)));
    html.push_str(&format!(
        r#"<div class="stats"><span>{}</span><span>{}</span></div>"#,
        escape_html(hero.stats.experience),
        escape_html(hero.stats.projects),
    ));
    html.push_str(&format!(
        r#"<button class="cta">{}</button>"#,
        escape_html(hero.cta)
    ));
    for link in page.social {
        html.push_str(&format!(
            r#"<a class="social" href="{}">{}</a>"#,
            escape_html(link.href),
            link.icon.glyph(),
        ));
    }
    html.push_str(&format!(
        r#"<img class="avatar" src="{}" alt="Avatar">"#,
        shared::AVATAR_URL
    ));
}

fn render_experience(html: &mut String, page: &Page) {
    section_heading(html, page, Section::Experience);
    html.push_str(r#"<ol class="timeline">"#);
    for job in page.content.experience.items {
        html.push_str(&format!(
            r#"<li><h3>{}</h3><span class="date">{}</span><p>{}</p><div>"#,
            escape_html(job.title),
            escape_html(job.date),
            escape_html(job.description),
        ));
        for tag in job.tags {
            html.push_str(&format!(r#"<span class="tag">#{}</span>"#, escape_html(tag)));
        }
        html.push_str("</div></li>");
    }
    html.push_str("</ol>");
}

fn render_projects(html: &mut String, page: &Page) {
    section_heading(html, page, Section::Projects);
    html.push_str(r#"<div class="projects">"#);
    for project in page.content.projects.items {
        html.push_str(&format!(
            r#"<div class="project-card" {SPOTLIGHT_ATTR}><div class="{SPOTLIGHT_CLASS}"></div>"#
        ));
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noreferrer">{} ↗</a>"#,
            escape_html(project.link),
            escape_html(page.view_label),
        ));
        html.push_str(&format!(
            "<h3>{}</h3><p>{}</p><div>",
            escape_html(project.title),
            escape_html(project.description),
        ));
        for tag in project.tags {
            html.push_str(&format!(r#"<span class="tag">{}</span>"#, escape_html(tag)));
        }
        html.push_str("</div>");
        if let Some(snippet) = &project.code_snippet {
            html.push_str(&format!(
                r#"<div class="snippet"><span class="file">{}</span><pre><code>{}</code></pre></div>"#,
                escape_html(snippet.file),
                escape_html(&snippet.preview()),
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
}

fn render_skills(html: &mut String, page: &Page) {
    section_heading(html, page, Section::Skills);
    html.push_str(r#"<div class="skills">"#);
    for panel in &page.skill_panels {
        html.push_str(&format!(
            r#"<div class="skill-panel"><h3>{} {}</h3>"#,
            panel.icon.glyph(),
            escape_html(panel.title)
        ));
        for skill in &panel.skills {
            html.push_str(&format!(
                r#"<div class="skill"><span>{icon} {name}</span><span>{pct}%</span><div class="skill-track"><div class="skill-fill" style="width: {pct}%"></div></div></div>"#,
                icon = escape_html(skill.icon.glyph()),
                name = escape_html(skill.name),
                pct = skill.percentage,
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
}

fn render_contact(html: &mut String, page: &Page) {
    section_heading(html, page, Section::Contact);
    html.push_str(r#"<div class="contacts">"#);
    for contact in page.contacts {
        html.push_str(&format!(
            r#"<a class="contact-card" href="{href}" target="_blank" rel="noreferrer"><span>{icon}</span><span>{label}</span><strong>{value}</strong></a>"#,
            href = escape_html(contact.href),
            icon = contact.icon.glyph(),
            label = escape_html(contact.label),
            value = escape_html(contact.value),
        ));
    }
    html.push_str("</div>");
    html.push_str(&format!(
        r#"<footer><p>{}</p><p>{} <span class="neon">{}</span></p></footer>"#,
        escape_html(page.content.footer.text),
        escape_html(shared::CREDIT_PREFIX),
        escape_html(shared::CREDIT_NAME),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::nav::NavState;

    fn page(language: Language, active: Section) -> Page {
        let mut nav = NavState::default();
        nav.click(active);
        Page::compose(language, &nav)
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn every_section_is_a_reveal_region() {
        let html = render_page(&page(Language::En, Section::Home), |_| false);
        for section in Section::ALL {
            assert!(html.contains(&format!(
                r#"<section id="{}" class="{REVEAL_CLASS}">"#,
                section.id()
            )));
        }
        assert!(!html.contains(REVEALED_CLASS));
    }

    #[test]
    fn revealed_regions_keep_their_class() {
        let html = render_page(&page(Language::Fa, Section::Home), |s| s == Section::Skills);
        assert!(html.contains(r#"<section id="skills" class="reveal-on-scroll reveal-visible">"#));
        assert_eq!(html.matches(REVEALED_CLASS).count(), 1);
    }

    #[test]
    fn active_nav_button_is_marked() {
        let html = render_page(&page(Language::En, Section::Projects), |_| false);
        assert!(html.contains(r#"<button class="nav-item active" data-nav="projects""#));
        assert_eq!(html.matches("nav-item active").count(), 1);
    }

    #[test]
    fn code_excerpt_is_truncated_and_escaped() {
        let html = render_page(&page(Language::Fa, Section::Home), |_| false);
        assert!(html.contains("MainActivity.java"));
        assert!(html.contains("..."));
        assert!(!html.contains("// Initialize views and setup"));
    }

    #[test]
    fn toggle_buttons_carry_action_hook() {
        let html = render_page(&page(Language::En, Section::Home), |_| false);
        assert_eq!(html.matches(r#"data-action="toggle-lang""#).count(), 2);
        assert!(html.contains("فارسی"));
    }

    #[test]
    fn sidebar_collapses_to_bottom_bar_on_narrow_screens() {
        let html = render_page(&page(Language::Fa, Section::Home), |_| false);
        assert!(html.contains(r#"<div class="brand desktop-only">"#));
        assert!(html.contains(r#"<button class="lang-toggle desktop-only" data-action="toggle-lang">"#));
        // The compact toggle in the top bar stays reachable.
        assert!(html.contains(r#"<button class="lang-toggle compact" data-action="toggle-lang">"#));

        let narrow = STYLESHEET
            .split("@media (max-width: 768px) {")
            .find(|block| block.trim_start().starts_with(".sidebar {"))
            .unwrap_or_default();
        assert!(narrow.contains("position: fixed; top: auto; bottom: 0;"));
        assert!(narrow.contains(".sidebar .desktop-only { display: none; }"));
    }

    #[test]
    fn pointer_is_hidden_only_while_custom_cursor_is_attached() {
        for rule in STYLESHEET.split('}').filter(|rule| rule.contains("cursor: none")) {
            let selector = rule.rsplit('{').nth(1).unwrap_or_default();
            assert!(
                selector.contains(&format!("body.{CURSOR_ACTIVE_CLASS}")),
                "cursor hidden without the body class: {selector}"
            );
        }
        assert!(STYLESHEET.contains("body.custom-cursor, body.custom-cursor .nav-item { cursor: none; }"));
    }
}
