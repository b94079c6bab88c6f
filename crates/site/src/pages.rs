use std::collections::BTreeSet;

use shared::domain::Page;

use crate::{content, layout};

/// Names of the optional image assets that were actually found on disk.
/// Renderers emit an `<img>` only for names present here; an absent
/// image is skipped silently.
#[derive(Debug, Clone, Default)]
pub struct AssetInventory {
    present: BTreeSet<String>,
}

impl AssetInventory {
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            present: names.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.present.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.present.contains(name)
    }
}

/// Fixed outbound links rendered as buttons.
#[derive(Debug, Clone)]
pub struct ExternalLinks {
    pub linkedin: String,
    pub portfolio: String,
}

/// One-shot status shown on the contact page after a form submission,
/// carried across the post-submit redirect as a query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Sent,
    Invalid,
    Failed,
}

impl Flash {
    pub fn query_value(self) -> &'static str {
        match self {
            Flash::Sent => "sent",
            Flash::Invalid => "invalid",
            Flash::Failed => "failed",
        }
    }

    pub fn from_query(value: &str) -> Option<Flash> {
        match value {
            "sent" => Some(Flash::Sent),
            "invalid" => Some(Flash::Invalid),
            "failed" => Some(Flash::Failed),
            _ => None,
        }
    }
}

/// Everything a render pass needs. The renderers perform no I/O; which
/// optional assets exist is decided by the caller and passed in, so a
/// page renders cleanly when every one of them is absent.
pub struct RenderContext<'a> {
    pub stylesheet: Option<&'a str>,
    pub images: &'a AssetInventory,
    pub resume_available: bool,
    pub resume_filename: &'a str,
    pub links: &'a ExternalLinks,
    pub flash: Option<Flash>,
}

/// Render the full HTML document for one page.
pub fn render_page(page: Page, ctx: &RenderContext) -> String {
    let body = match page {
        Page::Home => home(ctx),
        Page::Experience => experience(ctx),
        Page::Projects => projects(ctx),
        Page::Education => education(),
        Page::Certifications => certifications(),
        Page::Leadership => leadership(ctx),
        Page::Skills => skills(),
        Page::Contact => contact(ctx),
    };
    layout::document(page, ctx, &body)
}

fn section(title: &str, inner: &str) -> String {
    format!(
        "<section class=\"glass\"><div class=\"section-title\">{title}</div>{inner}</section>"
    )
}

fn bullet_list(items: &[&str]) -> String {
    let mut list = String::from("<ul>");
    for item in items {
        list.push_str(&format!("<li>{item}</li>"));
    }
    list.push_str("</ul>");
    list
}

fn badges(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("<span class=\"badge\">{item}</span>"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn image_if_present(ctx: &RenderContext, name: &str, alt: &str) -> String {
    if ctx.images.contains(name) {
        format!("<img class=\"wide\" src=\"/assets/{name}\" alt=\"{alt}\">")
    } else {
        String::new()
    }
}

/// Resume download control plus the LinkedIn button. When the resume
/// file is missing the control degrades to an informational note naming
/// the file to add.
fn contact_buttons(ctx: &RenderContext) -> String {
    let resume = if ctx.resume_available {
        "<a href=\"/resume\"><button class=\"cvbtn\">Download Resume</button></a>".to_string()
    } else {
        format!(
            "<div class=\"info\">Add {} to enable download.</div>",
            ctx.resume_filename
        )
    };
    format!(
        "{resume}<a href=\"{linkedin}\" target=\"_blank\" rel=\"noopener\">\
         <button class=\"cvbtn\">Visit LinkedIn</button></a>",
        linkedin = ctx.links.linkedin,
    )
}

fn portfolio_button(ctx: &RenderContext) -> String {
    format!(
        "<a href=\"{portfolio}\" target=\"_blank\" rel=\"noopener\">\
         <button class=\"cvbtn\">View Online Portfolio</button></a>",
        portfolio = ctx.links.portfolio,
    )
}

fn home(ctx: &RenderContext) -> String {
    let about = section("About", &format!("<p>{}</p>", content::PROFILE.about));
    let summary = format!(
        "<section class=\"glass\"><strong>Professional Summary</strong>\
         <p>{}</p></section>",
        content::PROFILE.summary,
    );
    let buttons = format!(
        "<section class=\"glass centered\">{}</section>",
        contact_buttons(ctx)
    );
    format!("{about}<div class=\"columns\"><div>{summary}</div><div>{buttons}</div></div>")
}

fn experience(ctx: &RenderContext) -> String {
    let mut inner = format!("<div class=\"toolbar\">{}</div>", portfolio_button(ctx));
    for (index, entry) in content::EXPERIENCE.iter().enumerate() {
        if index > 0 {
            inner.push_str("<hr>");
        }
        inner.push_str(&format!(
            "<h3>{role} — {org}</h3>",
            role = entry.role,
            org = entry.org,
        ));
        if let Some(period) = entry.period {
            inner.push_str(&format!("<div class=\"caption\">{period}</div>"));
        }
        inner.push_str(&bullet_list(entry.highlights));
    }
    section("Professional Experience", &inner)
}

fn projects(ctx: &RenderContext) -> String {
    let mut inner = String::new();
    for (index, project) in content::PROJECTS.iter().enumerate() {
        if index > 0 {
            inner.push_str("<hr>");
        }
        inner.push_str(&format!(
            "<h3>{name} — ({context})</h3><div class=\"caption\">{stack}</div>\
             <p>{summary}</p>",
            name = project.name,
            context = project.context,
            stack = project.stack,
            summary = project.summary,
        ));
        if let Some(screenshot) = project.screenshot {
            inner.push_str(&image_if_present(ctx, screenshot, project.name));
        }
    }
    section("Technical Projects", &inner)
}

fn education() -> String {
    let inner = format!(
        "<h3>{school}</h3><div class=\"caption\">{program}</div>\
         <strong>Awards &amp; Recognition</strong>{awards}",
        school = content::EDUCATION.school,
        program = content::EDUCATION.program,
        awards = bullet_list(content::EDUCATION.awards),
    );
    section("Education", &inner)
}

fn certifications() -> String {
    let inner = format!(
        "<strong>Certifications</strong>{certs}<hr>\
         <strong>Projects &amp; Events</strong>{events}<hr>\
         <strong>Seminars &amp; Conferences</strong>{seminars}",
        certs = bullet_list(content::CERTIFICATIONS),
        events = bullet_list(content::PROJECTS_AND_EVENTS),
        seminars = bullet_list(content::SEMINARS),
    );
    section("Certifications, Projects & Seminars", &inner)
}

fn leadership(ctx: &RenderContext) -> String {
    let photo = if ctx.images.contains(content::LEADERSHIP_IMAGE) {
        format!(
            "<figure><img class=\"wide\" src=\"/assets/{src}\" alt=\"{caption}\">\
             <figcaption class=\"caption\">{caption}</figcaption></figure>",
            src = content::LEADERSHIP_IMAGE,
            caption = content::LEADERSHIP_IMAGE_CAPTION,
        )
    } else {
        String::new()
    };
    let inner = format!(
        "{photo}<strong>Organizations &amp; Roles</strong>{roles}",
        roles = bullet_list(content::LEADERSHIP_ROLES),
    );
    section("Leadership Roles", &inner)
}

fn skills() -> String {
    let inner = format!(
        "<strong>Technical:</strong><div class=\"badges\">{tech}</div>\
         <strong>Soft Skills:</strong><div class=\"badges\">{soft}</div>",
        tech = badges(content::TECH_SKILLS),
        soft = badges(content::SOFT_SKILLS),
    );
    section("Technical & Soft Skills", &inner)
}

fn flash_banner(flash: Flash) -> &'static str {
    match flash {
        Flash::Sent => {
            "<div class=\"flash flash-ok\">Thanks. Your message was saved. \
             I will reply as soon as possible!</div>"
        }
        Flash::Invalid => {
            "<div class=\"flash flash-err\">Please enter a <strong>valid email \
             address</strong> and a <strong>short message</strong>.</div>"
        }
        Flash::Failed => {
            "<div class=\"flash flash-err\">There was an error saving your message.</div>"
        }
    }
}

fn contact(ctx: &RenderContext) -> String {
    let flash = ctx.flash.map(flash_banner).unwrap_or_default();
    let form = format!(
        "<p>{blurb}</p>{flash}\
         <form method=\"POST\" action=\"/contact\">\
         <div class=\"form-group\"><label>Your email</label>\
         <input type=\"text\" name=\"email\"></div>\
         <div class=\"form-group\"><label>Subject (optional)</label>\
         <input type=\"text\" name=\"subject\"></div>\
         <div class=\"form-group\"><label>Message</label>\
         <textarea name=\"message\" rows=\"6\"></textarea></div>\
         <button class=\"cvbtn\" type=\"submit\">Send message</button></form>",
        blurb = content::CONTACT_BLURB,
    );

    let card_lines = content::PROFILE
        .card_lines
        .iter()
        .map(|line| format!("<div>{line}</div>"))
        .collect::<String>();
    let card = format!(
        "<aside class=\"glass centered\">{card_lines}{buttons}</aside>",
        buttons = contact_buttons(ctx),
    );

    section(
        "Contact",
        &format!("<div class=\"columns\"><div>{form}</div>{card}</div>"),
    )
}
