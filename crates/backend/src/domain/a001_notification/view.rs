//! HTML of the notification page.
//!
//! The browser controller re-requests this same page with another `isAction`
//! and picks the `notification-item` nodes out of it, so items must stay
//! self-contained.

use contracts::domain::a001_notification::aggregate::Notification;
use contracts::domain::a001_notification::query::NotificationFilter;
use contracts::shared::dom_contract::{
    ACTIVE_CLASS, IS_ACTION_ATTRIBUTE, NOTIFICATION_ITEM_CLASS, NOTIFICATION_LIST_CLASS,
    TAB_CLASS,
};

pub fn render_page(filter: NotificationFilter, notifications: &[Notification]) -> String {
    let tabs: String = NotificationFilter::all()
        .iter()
        .map(|tab| render_tab(*tab, *tab == filter))
        .collect();
    let items: String = notifications.iter().map(render_item).collect();

    PAGE_HTML
        .replace("{{TABS}}", &tabs)
        .replace("{{LIST_CLASS}}", NOTIFICATION_LIST_CLASS)
        .replace("{{ITEMS}}", &items)
}

fn tab_label(filter: NotificationFilter) -> &'static str {
    match filter {
        NotificationFilter::Action => "やることリスト",
        NotificationFilter::Info => "お知らせ",
    }
}

fn render_tab(filter: NotificationFilter, active: bool) -> String {
    let class = if active {
        format!("{} {}", TAB_CLASS, ACTIVE_CLASS)
    } else {
        TAB_CLASS.to_string()
    };
    format!(
        r#"<li class="{}" {}="{}">{}</li>"#,
        class,
        IS_ACTION_ATTRIBUTE,
        filter.kind().query_value(),
        tab_label(filter)
    )
}

fn render_item(notification: &Notification) -> String {
    format!(
        r#"<li class="{class}" data-id="{id}"><p class="{class}__product">{product}</p><p class="{class}__message">{message}</p><time datetime="{datetime}">{date}</time></li>"#,
        class = NOTIFICATION_ITEM_CLASS,
        id = notification.id.value(),
        product = ammonia::clean_text(&notification.product_name),
        message = ammonia::clean_text(&notification.message),
        datetime = notification.created_at.to_rfc3339(),
        date = notification.created_at.format("%Y/%m/%d %H:%M"),
    )
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>通知</title>
  <style>
    .tab-list { display: flex; gap: 0; list-style: none; padding: 0; margin: 0 0 16px; }
    .tab { flex: 1; padding: 12px; text-align: center; cursor: pointer; border-bottom: 2px solid #ddd; }
    .tab.active { border-bottom-color: #e94b3c; font-weight: 600; }
    .notification-list { list-style: none; padding: 0; margin: 0; }
    .notification-item { padding: 12px 8px; border-bottom: 1px solid #eee; }
    .notification-item__product { margin: 0; font-weight: 600; }
    .notification-item__message { margin: 4px 0; }
    .notification-item time { color: #888; font-size: 12px; }
  </style>
</head>
<body>
  <main>
    <h1>通知</h1>
    <ul class="tab-list">{{TABS}}</ul>
    <ul class="{{LIST_CLASS}}">{{ITEMS}}</ul>
  </main>
  <script type="module">
    import init from "/pkg/frontend.js";
    init();
  </script>
</body>
</html>
"#;
