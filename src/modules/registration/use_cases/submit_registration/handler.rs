use crate::modules::registration::core::form::FieldId;
use crate::modules::registration::core::notices::{
    LOGIN_PATH, REGISTERED_NOTICE, SERVER_ERROR_NOTICE, rejection_notice,
};
use crate::modules::registration::core::request::RegistrationRequest;
use crate::modules::registration::core::response::RegistrationResponse;
use crate::modules::registration::use_cases::submit_registration::event::SubmitEvent;
use crate::modules::registration::use_cases::submit_registration::inbound::bindings::SubmitListener;
use crate::modules::registration::use_cases::submit_registration::outcome::{
    SubmissionError, SubmissionOutcome,
};
use crate::modules::registration::use_cases::submit_registration::ports::{
    FormDataProvider, FormError, PageEffects, RegistrationGateway,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct SubmitRegistrationHandler<TForm, TGateway, TEffects>
where
    TForm: FormDataProvider + 'static,
    TGateway: RegistrationGateway + 'static,
    TEffects: PageEffects + 'static,
{
    form: Arc<TForm>,
    gateway: Arc<TGateway>,
    effects: Arc<TEffects>,
}

impl<TForm, TGateway, TEffects> SubmitRegistrationHandler<TForm, TGateway, TEffects>
where
    TForm: FormDataProvider + 'static,
    TGateway: RegistrationGateway + 'static,
    TEffects: PageEffects + 'static,
{
    pub fn new(form: Arc<TForm>, gateway: Arc<TGateway>, effects: Arc<TEffects>) -> Self {
        Self {
            form,
            gateway,
            effects,
        }
    }

    /// Reads the form, posts it once and decodes the reply. Has no visible effect on the page.
    pub async fn submit(&self) -> Result<RegistrationResponse, SubmissionError> {
        let request = self.read_request()?;
        tracing::debug!(name = %request.name, email = %request.email, "posting registration");
        let body = self.gateway.post_registration(&request).await?;
        Ok(RegistrationResponse::from_slice(&body)?)
    }

    /// Handles one submit event: suppresses the default action, submits, and reports the
    /// result to the user. Errors end up as a notice, never as a panic.
    pub async fn handle(&self, event: &mut SubmitEvent) -> SubmissionOutcome {
        event.prevent_default();

        match self.submit().await {
            Ok(RegistrationResponse::Accepted { .. }) => {
                tracing::info!("registration accepted");
                self.effects.alert(REGISTERED_NOTICE);
                self.effects.navigate(LOGIN_PATH);
                SubmissionOutcome::Registered
            }
            Ok(RegistrationResponse::Rejected { message }) => {
                let notice = rejection_notice(message.as_deref()).to_string();
                tracing::info!(%notice, "registration rejected");
                self.effects.alert(&notice);
                SubmissionOutcome::Rejected { notice }
            }
            Err(error) => {
                tracing::error!(%error, "registration submission failed");
                self.effects.alert(SERVER_ERROR_NOTICE);
                SubmissionOutcome::Failed {
                    notice: SERVER_ERROR_NOTICE.to_string(),
                }
            }
        }
    }

    fn read_request(&self) -> Result<RegistrationRequest, FormError> {
        Ok(RegistrationRequest::new(
            self.form.field(FieldId::Name)?,
            self.form.field(FieldId::Email)?,
            self.form.field(FieldId::Password)?,
        ))
    }
}

#[async_trait]
impl<TForm, TGateway, TEffects> SubmitListener for SubmitRegistrationHandler<TForm, TGateway, TEffects>
where
    TForm: FormDataProvider + 'static,
    TGateway: RegistrationGateway + 'static,
    TEffects: PageEffects + 'static,
{
    async fn on_submit(&self, event: &mut SubmitEvent) -> SubmissionOutcome {
        self.handle(event).await
    }
}
