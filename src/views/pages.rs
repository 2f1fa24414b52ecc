//! Server-rendered pages.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating. All
//! animation is CSS; the only script drives the carousels and disables the
//! contact button once the form is submitted.

use crate::{
    models::section::SectionId,
    services::{
        admin_service::Dashboard,
        object_store::encode_object_path,
        site_service::{GalleryPage, HomePage, Slide, TestimonialCard},
    },
    views::{
        carousel::{Carousel, HERO_INTERVAL, TESTIMONIAL_INTERVAL},
        content::{
            FAQS, SERVICES, STUDIO_EMAIL, STUDIO_INSTAGRAM, STUDIO_LOCATION, STUDIO_NAME,
            STUDIO_PHONE, STUDIO_TAGLINE, WORKFLOW,
        },
        masonry::{GALLERY_COLUMNS, distribute_columns},
    },
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline status line shown after an admin or contact action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice notice-ok",
            Notice::Error(_) => "notice notice-error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

const SITE_CSS: &str = r#"
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:Georgia,serif;background:#0a0a0a;color:#f5f5f5;line-height:1.6}
a{color:inherit}
.container{max-width:1200px;margin:0 auto;padding:0 1rem}
.site-header{position:fixed;top:0;width:100%;z-index:20;background:rgba(0,0,0,.7);backdrop-filter:blur(6px)}
.site-header nav{display:flex;gap:1.5rem;justify-content:flex-end;padding:1rem}
.site-header .brand{margin-right:auto;font-weight:bold}
section{padding:6rem 0}
.section-subtitle{text-transform:uppercase;letter-spacing:.2em;color:#c9a96e;font-size:.8rem}
.section-title{font-size:2.5rem}
.hero{position:relative;height:100vh;overflow:hidden;padding:0}
.slide{position:absolute;inset:0;background-size:cover;background-position:center;opacity:0;transition:opacity 1s}
.slide.active{opacity:.5}
.hero-content{position:relative;z-index:2;height:100%;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center;animation:rise .8s ease-out}
.carousel-controls button{background:none;border:1px solid #888;color:#fff;padding:.3rem .8rem;cursor:pointer}
.carousel-controls .dot{width:.7rem;height:.7rem;padding:0;border-radius:50%;margin:0 .2rem}
.carousel-controls .dot.active{background:#c9a96e;border-color:#c9a96e}
.mobile-only{display:none}
@media (max-width:768px){.desktop-only{display:none}.mobile-only{display:block}}
.tiles{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:1rem}
.tile{position:relative;aspect-ratio:4/5;background:#1c1c1c center/cover;display:flex;align-items:flex-end;padding:1rem;text-decoration:none;transition:transform .3s}
.tile:hover{transform:scale(1.02)}
.cards{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:1.5rem}
.card{background:#161616;border:1px solid #262626;padding:1.5rem;border-radius:8px}
.testimonial{display:none}
.testimonial.active{display:block;animation:rise .6s ease-out}
details{border-bottom:1px solid #262626;padding:1rem 0}
summary{cursor:pointer;font-weight:bold}
form.stack{display:grid;gap:1rem}
input,textarea,select{width:100%;padding:.6rem;background:#000;border:1px solid #3f3f3f;color:#fff;border-radius:4px}
button{cursor:pointer}
.btn{background:#fff;color:#000;border:0;padding:.7rem 1.2rem;border-radius:4px;font-weight:bold}
.btn:disabled{background:#3f3f3f;color:#777}
.masonry{display:grid;grid-template-columns:repeat(3,1fr);gap:1rem}
.masonry-column{display:grid;gap:1rem;align-content:start}
.masonry img{width:100%;display:block;border-radius:4px}
@media (max-width:768px){.masonry{grid-template-columns:1fr}}
.lightbox{display:none;position:fixed;inset:0;background:rgba(0,0,0,.92);z-index:50;align-items:center;justify-content:center}
.lightbox:target{display:flex}
.lightbox img{max-width:92vw;max-height:88vh}
.lightbox .close{position:absolute;top:1rem;right:1.5rem;font-size:2rem;text-decoration:none}
.notice{margin:1rem 0;padding:.7rem 1rem;border-radius:4px}
.notice-ok{background:#12331f;color:#86efac}
.notice-error{background:#3b1212;color:#fca5a5}
.admin-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:2rem}
.admin-item{display:flex;gap:1rem;align-items:center;background:#161616;border:1px solid #262626;padding:1rem;border-radius:8px;margin-bottom:1rem}
.admin-item.is-cover{border-color:#c9a96e}
.admin-item img{width:80px;height:80px;object-fit:cover;border-radius:4px}
.admin-item .actions{display:grid;gap:.4rem;margin-left:auto}
.badge{color:#c9a96e;font-size:.75rem}
.muted{color:#8a8a8a;font-size:.85rem}
footer{padding:3rem 0;border-top:1px solid #262626;text-align:center}
@keyframes rise{from{opacity:0;transform:translateY(20px)}to{opacity:1;transform:none}}
"#;

const SITE_JS: &str = r#"
document.querySelectorAll('[data-carousel]').forEach(function (root) {
  var items = root.querySelectorAll('[data-slide]');
  var dots = root.querySelectorAll('[data-select]');
  var len = items.length, index = 0, hovered = false, touched = false;
  items.forEach(function (el, i) { if (el.classList.contains('active')) index = i; });
  function show(i) {
    if (len === 0) return;
    index = ((i % len) + len) % len;
    items.forEach(function (el, j) { el.classList.toggle('active', j === index); });
    dots.forEach(function (el, j) { el.classList.toggle('active', j === index); });
  }
  var prev = root.querySelector('[data-prev]'), next = root.querySelector('[data-next]');
  if (prev) prev.addEventListener('click', function () { show(index - 1); });
  if (next) next.addEventListener('click', function () { show(index + 1); });
  dots.forEach(function (el) {
    el.addEventListener('click', function () {
      var i = parseInt(el.dataset.select, 10);
      if (i >= 0 && i < len) show(i);
    });
  });
  root.addEventListener('mouseenter', function () { hovered = true; });
  root.addEventListener('mouseleave', function () { hovered = false; });
  root.addEventListener('touchstart', function () { touched = true; }, { passive: true });
  root.addEventListener('touchend', function () { touched = false; });
  root.addEventListener('touchcancel', function () { touched = false; });
  setInterval(function () {
    if (!hovered && !touched && len > 1) show(index + 1);
  }, parseInt(root.dataset.interval, 10) || 5000);
});
document.querySelectorAll('form[data-once]').forEach(function (form) {
  form.addEventListener('submit', function () {
    form.querySelectorAll('button[type=submit]').forEach(function (b) { b.disabled = true; });
  });
});
"#;

/// Base HTML document.
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(SITE_CSS)) }
            }
            body {
                (content)
                script { (PreEscaped(SITE_JS)) }
            }
        }
    }
}

fn notice_line(notice: Option<&Notice>) -> Markup {
    html! {
        @if let Some(notice) = notice {
            p class=(notice.class()) role="status" { (notice.text()) }
        }
    }
}

fn site_header() -> Markup {
    html! {
        header.site-header {
            nav {
                a.brand href="/" { (STUDIO_NAME) }
                a href="/#gallery" { "Gallery" }
                a href="/#about" { "About" }
                a href="/#services" { "Services" }
                a href="/#testimonials" { "Testimonials" }
                a href="/#faq" { "FAQ" }
                a href="/#contact" { "Contact" }
            }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer {
            div.container {
                p { (STUDIO_NAME) " · " (STUDIO_LOCATION) }
                p.muted {
                    a href={ "mailto:" (STUDIO_EMAIL) } { (STUDIO_EMAIL) }
                    " · " (STUDIO_PHONE) " · "
                    a href=(STUDIO_INSTAGRAM) target="_blank" rel="noopener" { "Instagram" }
                }
            }
        }
    }
}

/// Slides for one breakpoint; the first slide starts active.
fn hero_slides(slides: &[Slide], visibility: &str) -> Markup {
    let carousel = Carousel::new(slides.len());
    html! {
        div class=(visibility) data-carousel data-interval=(HERO_INTERVAL.as_millis().to_string()) {
            @for (i, slide) in slides.iter().enumerate() {
                div class=(if i == carousel.index() { "slide active" } else { "slide" })
                    data-slide
                    role="img"
                    aria-label=(slide.alt)
                    style={ "background-image:url('" (slide.url) "')" } {}
            }
        }
    }
}

fn testimonial_carousel(cards: &[TestimonialCard]) -> Markup {
    let carousel = Carousel::new(cards.len());
    html! {
        div.testimonials data-carousel data-interval=(TESTIMONIAL_INTERVAL.as_millis().to_string()) {
            @for (i, card) in cards.iter().enumerate() {
                blockquote class=(if i == carousel.index() { "testimonial active" } else { "testimonial" }) data-slide {
                    p { "“" (card.feedback) "”" }
                    footer.muted { (card.name) " · " (card.event) " · " (card.location) }
                }
            }
            @if carousel.len() > 1 {
                div.carousel-controls {
                    button type="button" data-prev aria-label="Previous testimonial" { "‹" }
                    @for i in 0..carousel.len() {
                        button type="button"
                            class=(if i == carousel.index() { "dot active" } else { "dot" })
                            data-select=(i)
                            aria-label={ "Show testimonial " (i + 1) } {}
                    }
                    button type="button" data-next aria-label="Next testimonial" { "›" }
                }
            }
        }
    }
}

/// The single-page marketing site.
pub fn home_page(home: &HomePage, form_token: &str, notice: Option<&Notice>) -> Markup {
    let content = html! {
        (site_header())
        main {
            section.hero {
                (hero_slides(&home.desktop_slides, "desktop-only"))
                (hero_slides(&home.mobile_slides, "mobile-only"))
                div.hero-content {
                    h1.section-title { (STUDIO_NAME) }
                    p { (STUDIO_TAGLINE) }
                    a.btn href="#gallery" { "View Portfolio" }
                }
            }
            section id="gallery" {
                div.container {
                    p.section-subtitle { "Portfolio" }
                    h2.section-title { "Gallery" }
                    div.tiles {
                        @for tile in &home.tiles {
                            a.tile href={ "/gallery/" (encode_object_path(tile.section.as_str())) }
                                style=[tile.cover_url.as_ref().map(|url| format!("background-image:url('{url}')"))] {
                                div {
                                    h3 { (tile.section.title()) }
                                    p.muted { (tile.section.blurb()) }
                                }
                            }
                        }
                    }
                }
            }
            section id="about" {
                div.container.cards {
                    img src=(home.about_image) alt="Photographer" style="width:100%";
                    div {
                        h2.section-title { (SectionId::About.title()) }
                        p { "Our passion lies in capturing the raw, unfiltered emotions that make life beautiful." }
                        p.muted {
                            "With years of experience across styles of photography, we bring a unique perspective to every shoot, "
                            "from grand weddings to intimate portrait sessions."
                        }
                    }
                }
            }
            section id="workflow" {
                div.container {
                    p.section-subtitle { "Workflow Matters A Lot" }
                    h2.section-title { "We provide high quality services" }
                    div.cards {
                        @for step in &WORKFLOW {
                            div.card {
                                p.badge { (step.number) }
                                h3 { (step.title) }
                                p.muted { (step.description) }
                            }
                        }
                    }
                }
            }
            section id="services" {
                div.container {
                    p.section-subtitle { "What we do" }
                    h2.section-title { "Services" }
                    div.cards {
                        @for service in &SERVICES {
                            details.card id={ "service-" (service.id) } open[service.id == SERVICES[0].id] {
                                summary { (service.title) }
                                p.badge { (service.short_desc) }
                                p.muted { (service.full_desc) }
                            }
                        }
                    }
                }
            }
            section id="testimonials" {
                div.container {
                    p.section-subtitle { "Kind words" }
                    h2.section-title { "Testimonials" }
                    (testimonial_carousel(&home.testimonials))
                }
            }
            section id="faq" {
                div.container {
                    p.section-subtitle { "Questions" }
                    h2.section-title { "FAQ" }
                    @for (i, faq) in FAQS.iter().enumerate() {
                        details open[i == 0] {
                            summary { (faq.question) }
                            p.muted { (faq.answer) }
                        }
                    }
                }
            }
            section id="contact" {
                div.container {
                    p.section-subtitle { "Get in touch" }
                    h2.section-title { "Contact" }
                    p.muted { "Ready to book a session or have questions? Fill out the form or reach out directly." }
                    (notice_line(notice))
                    form.stack method="post" action="/contact" data-once {
                        input type="hidden" name="form_token" value=(form_token);
                        input type="text" name="name" placeholder="Your name" required;
                        input type="email" name="email" placeholder="you@example.com" required;
                        input type="text" name="subject" placeholder="Wedding Photography Inquiry" required;
                        textarea name="message" rows="4" placeholder="Tell us about your event..." required {}
                        button.btn type="submit" { "Send Message" }
                    }
                }
            }
        }
        (site_footer())
    };
    base_document(STUDIO_NAME, content)
}

/// `/gallery/{category}`: masonry columns with a CSS lightbox per image.
pub fn gallery_page(page: &GalleryPage) -> Markup {
    let columns = distribute_columns(&page.images, GALLERY_COLUMNS);
    let content = html! {
        (site_header())
        main {
            section {
                div.container {
                    a.muted href="/#gallery" { "← Back to Gallery" }
                    h1.section-title { (page.title) }
                    @if page.unavailable {
                        p.notice.notice-error { "The gallery could not be loaded. Please try again." }
                    } @else if page.images.is_empty() {
                        p.muted { "No images in this category yet." }
                    } @else {
                        div.masonry {
                            @for column in &columns {
                                div.masonry-column {
                                    @for image in column {
                                        a href={ "#photo-" (image.id) } {
                                            img src=(image.url) alt={ (page.category) " photo" } loading="lazy";
                                        }
                                    }
                                }
                            }
                        }
                        @for image in &page.images {
                            div.lightbox id={ "photo-" (image.id) } {
                                a.close href="#_" aria-label="Close" { "×" }
                                img src=(image.url) alt={ (page.category) " photo" };
                            }
                        }
                    }
                }
            }
        }
        (site_footer())
    };
    base_document(&format!("{} · {}", page.title, STUDIO_NAME), content)
}

pub fn login_page(alert: Option<&str>) -> Markup {
    let content = html! {
        main.container style="max-width:420px;padding-top:8rem" {
            h1 { "Admin Login" }
            @if let Some(alert) = alert {
                p.notice.notice-error role="alert" { (alert) }
            }
            form.stack method="post" action="/admin/login" {
                label { "Username" input type="text" name="username" autocomplete="username"; }
                label { "Password" input type="password" name="password" autocomplete="current-password"; }
                button.btn type="submit" { "Login" }
            }
        }
    };
    base_document("Admin Login", content)
}

fn section_options(selected: &str) -> Markup {
    html! {
        @for section in SectionId::ALL {
            option value=(section.as_str()) selected[section.as_str() == selected] { (section.title()) }
        }
    }
}

pub fn dashboard_page(dashboard: &Dashboard, notice: Option<&Notice>) -> Markup {
    let content = html! {
        main.container style="padding-top:3rem" {
            div style="display:flex;justify-content:space-between;align-items:center" {
                h1 { "Admin Dashboard" }
                form method="post" action="/admin/logout" {
                    button.btn type="submit" { "Logout" }
                }
            }
            (notice_line(notice))
            div.admin-grid {
                div {
                    h2 { "Upload Image" }
                    form.stack method="post" action="/admin/images" enctype="multipart/form-data" {
                        label {
                            "Category"
                            input type="text" name="category" list="categories" value=(SectionId::Wedding.as_str()) required;
                        }
                        datalist id="categories" {
                            @for section in SectionId::GALLERY {
                                option value=(section.as_str()) {}
                            }
                        }
                        label { "Image" input type="file" name="file" accept="image/*" required; }
                        button.btn type="submit" { "Upload Image" }
                    }

                    h2 style="margin-top:2rem" { "Testimonials" }
                    form.stack method="post" action="/admin/testimonials" {
                        input type="text" name="name" placeholder="Client name" required;
                        input type="text" name="event" placeholder="Event" required;
                        input type="text" name="location" placeholder="Location" required;
                        textarea name="feedback" rows="3" placeholder="Feedback" required {}
                        button.btn type="submit" { "Add Testimonial" }
                    }
                    @for t in &dashboard.testimonials {
                        div.admin-item {
                            div {
                                p { (t.name) " · " span.muted { (t.event) } }
                                p.muted { (t.feedback) }
                            }
                            form.actions method="post" action={ "/admin/testimonials/" (t.id) "/delete" }
                                onsubmit="return confirm('Delete this testimonial?')" {
                                button type="submit" title="Delete Testimonial" { "✕" }
                            }
                        }
                    }
                }
                div {
                    h2 { "Uploaded Images" }
                    @if dashboard.images.is_empty() {
                        p.muted { "No images yet." }
                    }
                    @for image in &dashboard.images {
                        @let is_cover = dashboard.is_cover(image);
                        div class=(if is_cover { "admin-item is-cover" } else { "admin-item" }) {
                            img src=(image.url) alt=(image.category);
                            div {
                                p { (image.category) }
                                p.muted { (image.created_at.format("%Y-%m-%d").to_string()) }
                                @if is_cover {
                                    span.badge { "Current Cover" }
                                }
                            }
                            div.actions {
                                form method="post" action={ "/admin/images/" (image.id) "/cover" } {
                                    select name="section_id" { (section_options(&image.category)) }
                                    button type="submit" { "Set Cover" }
                                }
                                form method="post" action={ "/admin/images/" (image.id) "/hero" } {
                                    label.muted {
                                        input type="checkbox" name="show_on_desktop_hero" value="true"
                                            checked[image.show_on_desktop_hero == Some(true)];
                                        " Desktop hero"
                                    }
                                    label.muted {
                                        input type="checkbox" name="show_on_mobile_hero" value="true"
                                            checked[image.show_on_mobile_hero == Some(true)];
                                        " Mobile hero"
                                    }
                                    button type="submit" { "Save" }
                                }
                                form method="post" action={ "/admin/images/" (image.id) "/delete" }
                                    onsubmit="return confirm('Are you sure you want to delete this image?')" {
                                    button type="submit" title="Delete Image" { "✕" }
                                }
                            }
                        }
                    }
                }
                div {
                    h2 { "Messages" }
                    @if dashboard.messages.is_empty() {
                        p.muted { "No messages yet." }
                    }
                    @for msg in &dashboard.messages {
                        div.card style="margin-bottom:1rem" {
                            div style="display:flex;justify-content:space-between" {
                                h3 { (msg.subject) }
                                form method="post" action={ "/admin/messages/" (msg.id) "/delete" }
                                    onsubmit="return confirm('Are you sure you want to delete this message?')" {
                                    button type="submit" title="Delete Message" { "✕" }
                                }
                            }
                            p.muted { (msg.created_at.format("%Y-%m-%d").to_string()) }
                            p { "From: " (msg.name) }
                            p { "Email: " a href={ "mailto:" (msg.email) } { (msg.email) } }
                            p style="white-space:pre-wrap" { (msg.message) }
                        }
                    }
                }
            }
        }
    };
    base_document("Admin Dashboard", content)
}
