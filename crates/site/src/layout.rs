use shared::domain::Page;

use crate::{
    content::{FOOTER, PROFILE},
    pages::RenderContext,
};

/// Wrap a rendered page body in the full document: stylesheet (when the
/// file was found), hero header, navigation, and footer.
pub fn document(page: Page, ctx: &RenderContext, body: &str) -> String {
    let style = ctx
        .stylesheet
        .map(|css| format!("<style>{css}</style>"))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
         <title>{title} | {name}</title>{style}</head>\
         <body>{hero}{nav}<main class=\"container\">{body}</main>\
         <footer class=\"muted\">{footer}</footer></body></html>",
        title = page.title(),
        name = PROFILE.name,
        hero = hero(ctx),
        nav = nav(page),
        footer = FOOTER,
    )
}

fn hero(ctx: &RenderContext) -> String {
    let portrait = if ctx.images.contains(PROFILE.image) {
        format!(
            "<img class=\"portrait\" src=\"/assets/{src}\" alt=\"{name}\" width=\"220\">",
            src = PROFILE.image,
            name = PROFILE.name,
        )
    } else {
        String::new()
    };

    format!(
        "<header class=\"glass hero\"><div><h1>{name}</h1>\
         <div class=\"muted\">{contact_line}</div>\
         <div class=\"typing\">{tagline}</div></div>{portrait}</header>",
        name = PROFILE.name,
        contact_line = PROFILE.contact_line,
        tagline = PROFILE.tagline,
    )
}

fn nav(current: Page) -> String {
    let mut links = String::new();
    for page in Page::ALL {
        let class = if page == current { " class=\"active\"" } else { "" };
        links.push_str(&format!(
            "<a href=\"{href}\"{class}>{title}</a>",
            href = page.path(),
            title = page.title(),
        ));
    }
    format!("<nav class=\"glass\">{links}</nav>")
}
