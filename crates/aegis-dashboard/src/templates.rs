//! HTML templates for the dashboard.
//!
//! Uses a simple template approach with Tailwind CSS and HTMX.

/// Base HTML layout wrapper.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Aegis Dashboard</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {{ darkMode: 'class' }}
    </script>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
</head>
<body class="bg-gray-50 dark:bg-gray-900 min-h-screen">
    {NAV}

    <main class="p-6 lg:p-8">
        <div class="max-w-7xl mx-auto">
            {content}
        </div>
    </main>
</body>
</html>"##,
        title = html_escape(title),
        NAV = nav_template(),
    )
}

fn nav_template() -> &'static str {
    r##"<nav class="bg-slate-800 dark:bg-slate-950 text-white px-4 py-3 sticky top-0 z-50 shadow-lg">
        <div class="flex items-center justify-between">
            <a href="/" class="flex items-center gap-2">
                <i class="fas fa-shield-halved text-xl"></i>
                <span class="font-semibold">Aegis</span>
                <span class="text-sm bg-slate-700 px-2 py-1 rounded">Dashboard</span>
            </a>
        </div>
    </nav>"##
}

/// Card component.
pub fn card(title: &str, content: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h3>
            </div>
            <div class="p-6">
                {content}
            </div>
        </div>"##
    )
}

/// Badge component.
pub fn badge(text: &str, color: &str) -> String {
    format!(
        r##"<span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-{color}-100 dark:bg-{color}-900/30 text-{color}-800 dark:text-{color}-300">{text}</span>"##
    )
}

/// Table shell with a header row; `body_html` is inserted into `<tbody>`.
pub fn table(headers: &[&str], body_html: &str) -> String {
    let headers_html: String = headers
        .iter()
        .map(|h| format!(r#"<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{h}</th>"#))
        .collect();

    format!(
        r##"<div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-800">
                    <tr>{headers_html}</tr>
                </thead>
                <tbody class="bg-white dark:bg-gray-900 divide-y divide-gray-200 dark:divide-gray-700">
                    {body_html}
                </tbody>
            </table>
        </div>"##
    )
}

/// HTML escape a string.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// First `max_chars` characters of `s`, without an ellipsis.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
