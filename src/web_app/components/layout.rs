// web_app/components/layout.rs - Site chrome
//
// Header, footer and the contact section shared by every page.

use leptos::prelude::*;

pub const SITE_NAME: &str = "ServiceSite";
pub const CONTACT_PHONE: &str = "(555) 010-2030";
pub const CONTACT_EMAIL: &str = "hello@example.com";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="/" class="text-xl font-bold text-blue-700">{SITE_NAME}</a>
                <nav class="flex gap-6 text-sm text-gray-600">
                    <a href="/" class="hover:text-gray-900">"Services"</a>
                    <a href="/tools/generator" class="hover:text-gray-900">"Content Tools"</a>
                    <a href="#contact" class="hover:text-gray-900">"Contact"</a>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200 mt-12 py-8">
            <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                <p>{format!("© {} {}. Built with Leptos, Actix, and PostgreSQL.", copyright_year(), SITE_NAME)}</p>
            </div>
        </footer>
    }
}

fn copyright_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

/// `tel:` link with only the dialable characters of `phone`
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{}", digits)
}

/// Static call-to-action block with contact details
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="bg-blue-50 py-12">
            <div class="container mx-auto px-4 max-w-4xl text-center">
                <h2 class="text-2xl font-bold mb-2">"Get a Free Quote"</h2>
                <p class="text-gray-600 mb-6">"Tell us what you need and we'll get back to you within one business day."</p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <a href=tel_href(CONTACT_PHONE) class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                        {format!("Call {}", CONTACT_PHONE)}
                    </a>
                    <a href=format!("mailto:{}", CONTACT_EMAIL) class="px-6 py-3 bg-white border border-gray-300 rounded-lg hover:bg-gray-50">
                        {CONTACT_EMAIL}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(tel_href("(555) 010-2030"), "tel:5550102030");
        assert_eq!(tel_href("+1 555 010 2030"), "tel:+15550102030");
    }
}
