//! Access façade over the content store.
//!
//! `DataSource` is the retrieval contract a future network-backed client
//! would implement; the shipped `StaticDataSource` resolves every call
//! immediately from the compiled-in store. Methods are typed fallible so a
//! real implementation can surface timeout, validation and server errors
//! without changing the trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::content::{
    self, Certification, ContactInfo, EducationEntry, ExperienceEntry, FooterContent,
    ProfessionalSummary, Profile, ProjectEntry, SkillCategory, Statistics,
};
use crate::error::FolioResult;

/// Fixed acknowledgement returned by the contact-form stub.
pub const ACK_MESSAGE: &str =
    "Thank you for your message. I will respond within 24-48 hours.";

/// An inbound contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Acknowledgement for a contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

/// Retrieval contract for portfolio data.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn profile(&self) -> FolioResult<Profile>;
    async fn summary(&self) -> FolioResult<ProfessionalSummary>;
    async fn experience(&self) -> FolioResult<Vec<ExperienceEntry>>;
    async fn skills(&self) -> FolioResult<Vec<SkillCategory>>;
    async fn projects(&self) -> FolioResult<Vec<ProjectEntry>>;
    async fn certifications(&self) -> FolioResult<Vec<Certification>>;
    async fn education(&self) -> FolioResult<Vec<EducationEntry>>;
    async fn statistics(&self) -> FolioResult<Statistics>;
    async fn contact_info(&self) -> FolioResult<ContactInfo>;
    async fn footer(&self) -> FolioResult<FooterContent>;

    /// Submit a contact form. The stub never contacts an endpoint and never
    /// fails; a real backend must add timeout and cancellation handling here.
    async fn submit_contact_form(&self, form: ContactForm) -> FolioResult<ContactAck>;
}

/// In-process data source backed by the static content store.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataSource;

impl StaticDataSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn profile(&self) -> FolioResult<Profile> {
        Ok(content::store().profile.clone())
    }

    async fn summary(&self) -> FolioResult<ProfessionalSummary> {
        Ok(content::store().summary.clone())
    }

    async fn experience(&self) -> FolioResult<Vec<ExperienceEntry>> {
        Ok(content::store().experience.clone())
    }

    async fn skills(&self) -> FolioResult<Vec<SkillCategory>> {
        Ok(content::store().skills.clone())
    }

    async fn projects(&self) -> FolioResult<Vec<ProjectEntry>> {
        Ok(content::store().projects.clone())
    }

    async fn certifications(&self) -> FolioResult<Vec<Certification>> {
        Ok(content::store().certifications.clone())
    }

    async fn education(&self) -> FolioResult<Vec<EducationEntry>> {
        Ok(content::store().education.clone())
    }

    async fn statistics(&self) -> FolioResult<Statistics> {
        Ok(content::store().statistics.clone())
    }

    async fn contact_info(&self) -> FolioResult<ContactInfo> {
        Ok(content::store().contact.clone())
    }

    async fn footer(&self) -> FolioResult<FooterContent> {
        Ok(content::store().footer.clone())
    }

    async fn submit_contact_form(&self, form: ContactForm) -> FolioResult<ContactAck> {
        tracing::info!(
            name = %form.name,
            email = %form.email,
            subject = form.subject.as_deref().unwrap_or(""),
            "contact form submitted"
        );
        Ok(ContactAck {
            success: true,
            message: ACK_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(message: &str) -> ContactForm {
        ContactForm {
            name: "Recruiter".to_string(),
            email: "hiring@example.com".to_string(),
            subject: None,
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn submit_always_acknowledges_with_fixed_message() {
        let source = StaticDataSource::new();
        let ack = source.submit_contact_form(form("hello")).await.unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, ACK_MESSAGE);
    }

    #[tokio::test]
    async fn submit_is_idempotent_across_inputs() {
        let source = StaticDataSource::new();
        let first = source.submit_contact_form(form("one")).await.unwrap();
        let second = source.submit_contact_form(form("two")).await.unwrap();
        let third = source.submit_contact_form(form("one")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[tokio::test]
    async fn slices_match_the_store() {
        let source = StaticDataSource::new();
        let profile = source.profile().await.unwrap();
        assert_eq!(profile.name, crate::content::store().profile.name);

        let experience = source.experience().await.unwrap();
        assert_eq!(experience.len(), crate::content::store().experience.len());

        let stats = source.statistics().await.unwrap();
        assert_eq!(stats.projects_managed, 100);

        let contact = source.contact_info().await.unwrap();
        assert_eq!(contact.methods.len(), crate::content::store().contact.methods.len());

        let footer = source.footer().await.unwrap();
        assert!(!footer.sections.is_empty());
    }
}
