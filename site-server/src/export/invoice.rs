//! Printable invoice renderer
//!
//! Renders one booking into a self-contained HTML document for the
//! browser print dialog. Not machine-parseable by contract, but every
//! user-supplied string is entity-escaped before it reaches the markup;
//! unescaped text in this path is a security defect, not a display bug.

use chrono_tz::Tz;

use shared::models::{Booking, Tour};

use crate::utils::time::format_display;

const OPERATOR_NAME: &str = "Tradewinds Travel & Tours";

/// Escape text for embedding in HTML element/attribute content
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

fn push_row(doc: &mut String, label: &str, value: &str) {
    doc.push_str(&format!(
        "<tr><th>{}</th><td>{}</td></tr>\n",
        escape_html(label),
        escape_html(value)
    ));
}

/// Invoice renderer
///
/// Renders booking invoices for the admin print flow.
pub struct InvoiceRenderer {
    timezone: Tz,
}

impl InvoiceRenderer {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Render a booking to a complete HTML document
    ///
    /// `now` stamps the issue time; the tour is optional so a booking
    /// whose tour was retired still prints.
    pub fn render(&self, booking: &Booking, tour: Option<&Tour>, now: i64) -> String {
        let mut doc = String::with_capacity(2048);

        doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        doc.push_str(&format!(
            "<title>Invoice {}</title>\n",
            escape_html(&booking.id)
        ));
        doc.push_str(
            "<style>\n\
             body { font-family: Georgia, serif; margin: 2.5rem; color: #222; }\n\
             h1 { font-size: 1.4rem; border-bottom: 2px solid #222; padding-bottom: .5rem; }\n\
             table { border-collapse: collapse; width: 100%; margin-top: 1rem; }\n\
             th, td { text-align: left; padding: .4rem .6rem; border-bottom: 1px solid #ccc; }\n\
             th { width: 12rem; color: #555; font-weight: normal; }\n\
             .amount { font-size: 1.2rem; font-weight: bold; }\n\
             footer { margin-top: 2rem; font-size: .8rem; color: #777; }\n\
             </style>\n</head>\n<body>\n",
        );

        self.render_header(&mut doc, booking);
        self.render_details(&mut doc, booking, tour);
        self.render_footer(&mut doc, now);

        doc.push_str("</body>\n</html>\n");
        doc
    }

    fn render_header(&self, doc: &mut String, booking: &Booking) {
        doc.push_str(&format!("<h1>{}</h1>\n", escape_html(OPERATOR_NAME)));
        doc.push_str(&format!(
            "<p>Booking invoice <strong>{}</strong></p>\n",
            escape_html(&booking.id)
        ));
    }

    fn render_details(&self, doc: &mut String, booking: &Booking, tour: Option<&Tour>) {
        let tour_title = tour.map(|t| t.title.as_str()).unwrap_or(&booking.tour_id);

        doc.push_str("<table>\n");
        push_row(doc, "Customer", &booking.customer_name);
        push_row(doc, "Email", &booking.email);
        push_row(doc, "Phone", &booking.phone);
        push_row(doc, "Tour", tour_title);
        if let Some(t) = tour {
            push_row(doc, "Location", &t.location);
        }
        push_row(
            doc,
            "Scheduled",
            &format_display(booking.scheduled_at, self.timezone),
        );
        push_row(doc, "Party size", &booking.party_size.to_string());
        push_row(doc, "Status", booking.status.as_str());
        if let Some(notes) = &booking.notes {
            push_row(doc, "Notes", notes);
        }
        doc.push_str(&format!(
            "<tr><th>Amount</th><td class=\"amount\">{}</td></tr>\n",
            escape_html(&booking.amount.to_string())
        ));
        doc.push_str("</table>\n");
    }

    fn render_footer(&self, doc: &mut String, now: i64) {
        doc.push_str(&format!(
            "<footer>Issued {} &middot; {}</footer>\n",
            escape_html(&format_display(now, self.timezone)),
            escape_html(OPERATOR_NAME)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::models::BookingStatus;
    use shared::money::{Currency, Money};

    const KL: Tz = chrono_tz::Asia::Kuala_Lumpur;

    fn booking() -> Booking {
        Booking {
            id: "BK-9002".to_string(),
            scheduled_at: KL
                .with_ymd_and_hms(2026, 9, 1, 8, 0, 0)
                .unwrap()
                .timestamp_millis(),
            customer_name: "Tan & Sons <Travel>".to_string(),
            email: "tan@example.com".to_string(),
            phone: "+60-12-111 2222".to_string(),
            tour_id: "t-penang".to_string(),
            party_size: 4,
            amount: Money::from_major(1400, Currency::Myr),
            status: BookingStatus::Confirmed,
            notes: Some("<script>alert('x')</script>".to_string()),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_user_text_is_escaped() {
        let renderer = InvoiceRenderer::new(KL);
        let html = renderer.render(&booking(), None, 0);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Tan &amp; Sons &lt;Travel&gt;"));
    }

    #[test]
    fn test_contains_booking_fields() {
        let renderer = InvoiceRenderer::new(KL);
        let html = renderer.render(&booking(), None, 0);

        assert!(html.contains("BK-9002"));
        assert!(html.contains("RM1400.00"));
        assert!(html.contains("confirmed"));
        // tour id fallback when the tour record is missing
        assert!(html.contains("t-penang"));
    }

    #[test]
    fn test_is_complete_document() {
        let renderer = InvoiceRenderer::new(KL);
        let html = renderer.render(&booking(), None, 0);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_escape_html_table() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(escape_html("\"hi\""), "&quot;hi&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
