//! Server-rendered pages. Interactive state (open forms, expanded threads,
//! optimistic likes) lives in `static/app.js`.

use std::fmt::Write;

use axum::{extract::State, response::Html};
use chrono::{DateTime, Utc};

use crate::{
    catalog::CATEGORIES,
    error::AppError,
    models::{Comment, Post, PostKind},
    store::DynStore,
    utils::{
        html::{escape, render_markdown},
        time::format_time_ago,
    },
};

const AVATAR_COLORS: usize = 8;
const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Palette slot and two-letter initials for an anonymous author, derived
/// from the row id so a card always looks the same.
pub fn avatar(id: i64) -> (usize, String) {
    let color = id.rem_euclid(AVATAR_COLORS as i64) as usize;
    let first = LETTERS[id.rem_euclid(26) as usize] as char;
    let second = LETTERS[(id.rem_euclid(26) * 7).rem_euclid(26) as usize] as char;
    (color, format!("{}{}", first, second))
}

/// Acts feed.
pub async fn home(State(store): State<DynStore>) -> Result<Html<String>, AppError> {
    let acts = store.list_posts(PostKind::Act).await?;
    let now = Utc::now();

    let mut body = String::new();
    body.push_str(&post_form(
        "share-form",
        "Share Your Act of Kindness",
        "Tell the community about something kind you did or experienced. Stay anonymous and inspire others!",
        "/api/acts",
        PostKind::Act.max_len(),
        "Share Anonymously",
    ));

    if acts.is_empty() {
        body.push_str(r#"<p class="empty">No acts shared yet. Be the first!</p>"#);
    }

    body.push_str(r#"<div class="feed">"#);
    for act in &acts {
        let comments = store.list_comments(act.id).await?;
        body.push_str(&act_card(act, &comments, now));
    }
    body.push_str("</div>");

    Ok(Html(layout(
        "Kindness Network",
        "Anonymous acts of service &amp; kindness",
        ("Share Kindness", "share-form"),
        &body,
    )))
}

/// Suggestion catalog plus community ideas.
pub async fn ideas(State(store): State<DynStore>) -> Result<Html<String>, AppError> {
    let ideas = store.list_posts(PostKind::Idea).await?;
    let now = Utc::now();

    let mut body = String::new();
    body.push_str(&post_form(
        "idea-form",
        "Share an Idea",
        "Have a way to be kind that others could try? Share it with the community.",
        "/api/ideas",
        PostKind::Idea.max_len(),
        "Submit Idea",
    ));

    body.push_str(r#"<section class="catalog">"#);
    for category in CATEGORIES {
        let _ = write!(
            body,
            r#"<div class="category"><h2>{}</h2><ul>"#,
            escape(category.category)
        );
        for suggestion in category.suggestions {
            let _ = write!(body, "<li>{}</li>", escape(suggestion));
        }
        body.push_str("</ul></div>");
    }
    body.push_str("</section>");

    body.push_str(r#"<h2 class="section-title">Community Ideas</h2><div class="feed">"#);
    if ideas.is_empty() {
        body.push_str(r#"<p class="empty">No ideas yet.</p>"#);
    }
    for idea in &ideas {
        body.push_str(&idea_card(idea, now));
    }
    body.push_str("</div>");

    Ok(Html(layout(
        "Ideas for Kindness",
        "Ways to make someone's day",
        ("Share Idea", "idea-form"),
        &body,
    )))
}

fn layout(title: &str, subtitle: &str, toggle: (&str, &str), body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header class="top">
  <div>
    <h1>{title}</h1>
    <p class="subtitle">{subtitle}</p>
  </div>
  <nav><a href="/">Acts</a> <a href="/ideas">Ideas</a></nav>
  <button class="toggle" data-target="{target}" data-open-label="Cancel">{label}</button>
</header>
<main>
{body}
</main>
<script src="/static/app.js"></script>
</body>
</html>"#,
        title = title,
        subtitle = subtitle,
        target = toggle.1,
        label = toggle.0,
        body = body,
    )
}

fn post_form(id: &str, heading: &str, blurb: &str, endpoint: &str, max: u64, submit: &str) -> String {
    format!(
        r#"<form id="{id}" class="post-form" data-endpoint="{endpoint}" hidden>
  <h2>{heading}</h2>
  <p>{blurb}</p>
  <textarea name="content" maxlength="{max}" required></textarea>
  <div class="form-footer">
    <span class="counter" data-max="{max}">0/{max} characters</span>
    <button type="submit">{submit}</button>
  </div>
</form>"#,
        id = id,
        endpoint = endpoint,
        heading = heading,
        blurb = blurb,
        max = max,
        submit = submit,
    )
}

fn author_header(id: i64, created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let (color, initials) = avatar(id);
    format!(
        r#"<div class="author"><div class="avatar avatar-{color}">{initials}</div><div><div class="name">Anonymous</div><div class="age">{age}</div></div></div>"#,
        color = color,
        initials = initials,
        age = format_time_ago(created_at, now),
    )
}

fn heart_button(kind: PostKind, post: &Post) -> String {
    format!(
        r#"<button class="heart" data-kind="{kind}" data-id="{id}"><span class="icon">&#9829;</span> <span class="count">{hearts}</span></button>"#,
        kind = kind.table(),
        id = post.id,
        hearts = post.hearts,
    )
}

fn act_card(act: &Post, comments: &[Comment], now: DateTime<Utc>) -> String {
    let mut thread = String::new();
    for comment in comments {
        let _ = write!(
            thread,
            r#"<li class="comment"><span class="age">{}</span><div class="markdown">{}</div></li>"#,
            format_time_ago(comment.created_at, now),
            render_markdown(&comment.content),
        );
    }

    let count = match comments.len() {
        1 => "1 comment".to_string(),
        n => format!("{} comments", n),
    };

    format!(
        r#"<article class="card" id="act-{id}">
  {header}
  <div class="markdown">{content}</div>
  <div class="actions">{heart} <button class="toggle" data-target="comments-{id}">{count}</button></div>
  <section class="comments" id="comments-{id}" hidden>
    <ul>{thread}</ul>
    <form class="comment-form" data-endpoint="/api/acts/{id}/comments">
      <textarea name="content" maxlength="1000" placeholder="Add a kind word..." required></textarea>
      <button type="submit">Comment</button>
    </form>
  </section>
</article>"#,
        id = act.id,
        header = author_header(act.id, act.created_at, now),
        content = render_markdown(&act.content),
        heart = heart_button(PostKind::Act, act),
        count = count,
        thread = thread,
    )
}

fn idea_card(idea: &Post, now: DateTime<Utc>) -> String {
    format!(
        r#"<article class="card" id="idea-{id}">
  {header}
  <div class="markdown">{content}</div>
  <div class="actions">{heart}</div>
</article>"#,
        id = idea.id,
        header = author_header(idea.id, idea.created_at, now),
        content = render_markdown(&idea.content),
        heart = heart_button(PostKind::Idea, idea),
    )
}
