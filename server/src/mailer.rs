//! Contact-inquiry email dispatch over SMTP.
//!
//! One transport built at startup; each inquiry becomes a multipart message
//! (plaintext plus a branded HTML card) with reply-to set to the sender, so
//! answering the notification answers the guest.

use chrono::{FixedOffset, Utc};
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{config::Config, error::AppError};

// brand palette, mirrors the site theme
const BRAND_RED: &str = "#8d0000";
const ACCENT_COPPER: &str = "#c47742";
const WARM_PAPER: &str = "#e9dcd4";
const DEEP_INK: &str = "#241f20";

pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub tel: String,
    pub message: String,
}

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipients: Vec<Mailbox>,
}

impl Mailer {
    pub fn new(config: &Config) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .expect("SMTP misconfigured!")
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        let from = format!("Bahi Café <{}>", config.mail_from)
            .parse()
            .expect("MAIL_FROM misconfigured!");

        let recipients = config
            .mail_recipients
            .split(',')
            .map(|address| address.trim().parse().expect("MAIL_RECIPIENTS misconfigured!"))
            .collect();

        Self {
            transport,
            from,
            recipients,
        }
    }

    pub async fn send_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError> {
        let reply_to: Mailbox = inquiry
            .email
            .parse()
            .map_err(|_| AppError::Validation("Please provide a valid email address."))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .subject(format!("Bahi · New Inquiry from {}", inquiry.name));

        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }

        let message = builder
            .multipart(MultiPart::alternative_plain_html(
                build_text(inquiry, &submitted_at()),
                build_html(inquiry, &submitted_at()),
            ))
            .map_err(|e| AppError::InternalError(Box::new(e)))?;

        self.transport.send(message).await?;

        Ok(())
    }
}

/// Local café time, the kitchen does not think in UTC.
fn submitted_at() -> String {
    let amman = FixedOffset::east_opt(3 * 3600).unwrap();
    Utc::now()
        .with_timezone(&amman)
        .format("%d/%m/%Y, %H:%M")
        .to_string()
}

fn build_text(inquiry: &Inquiry, submitted_at: &str) -> String {
    let tel = if inquiry.tel.is_empty() {
        "Not provided"
    } else {
        &inquiry.tel
    };

    [
        "BAHI CAFÉ",
        "New Contact Inquiry",
        "",
        &format!("Name: {}", inquiry.name),
        &format!("Email: {}", inquiry.email),
        &format!("Phone: {tel}"),
        "",
        "MESSAGE",
        &inquiry.message,
        "",
        &format!("Submitted: {submitted_at} (Amman Time)"),
    ]
    .join("\n")
}

fn build_html(inquiry: &Inquiry, submitted_at: &str) -> String {
    let tel = if inquiry.tel.is_empty() {
        "Not provided"
    } else {
        &inquiry.tel
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<body style="margin:0; padding:24px; background-color:#f5f5f5; font-family:'Helvetica Neue', Arial, sans-serif;">
  <table width="100%" cellpadding="0" cellspacing="0" style="max-width:600px; margin:0 auto; background-color:#ffffff; border-radius:16px; overflow:hidden;">
    <tr>
      <td style="background-color:{WARM_PAPER}; padding:32px 24px; text-align:center; border-bottom:3px solid {BRAND_RED};">
        <h1 style="margin:0; color:{BRAND_RED}; font-size:32px; letter-spacing:3px;">BAHI</h1>
        <p style="margin:8px 0 0; color:{DEEP_INK}; font-size:13px; letter-spacing:2px; text-transform:uppercase; opacity:0.7;">Café · Amman</p>
      </td>
    </tr>
    <tr>
      <td style="padding:32px 24px;">
        <p style="margin:0 0 8px; font-size:12px; letter-spacing:1.5px; text-transform:uppercase; color:{ACCENT_COPPER}; text-align:center;">New Contact Inquiry</p>
        <h2 style="margin:0 0 24px; color:{DEEP_INK}; font-size:22px; text-align:center;">Message from {name}</h2>
        <div style="background-color:{WARM_PAPER}; border-radius:12px; padding:20px; margin-bottom:20px; border-left:4px solid {ACCENT_COPPER};">
          <p style="margin:0 0 8px; color:{DEEP_INK};"><strong>Name:</strong> {name}</p>
          <p style="margin:0 0 8px;"><strong>Email:</strong> <a href="mailto:{email}" style="color:{BRAND_RED}; text-decoration:none;">{email}</a></p>
          <p style="margin:0; color:{DEEP_INK};"><strong>Phone:</strong> {tel}</p>
        </div>
        <div style="border:2px solid {WARM_PAPER}; border-radius:12px; padding:20px;">
          <p style="margin:0 0 12px; font-size:11px; letter-spacing:1px; text-transform:uppercase; color:{ACCENT_COPPER};">Message</p>
          <p style="margin:0; line-height:1.7; color:{DEEP_INK}; font-size:15px;">{message}</p>
        </div>
      </td>
    </tr>
    <tr>
      <td style="background-color:{WARM_PAPER}; padding:20px; text-align:center;">
        <p style="margin:0; color:#6d5a52; font-size:12px;">Received via the <strong>Bahi Café</strong> contact form · Submitted {submitted_at} Amman Time</p>
      </td>
    </tr>
  </table>
</body>
</html>"#,
        name = inquiry.name,
        email = inquiry.email,
        message = inquiry.message,
    )
}
