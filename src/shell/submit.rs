use std::sync::Arc;

use crate::modules::registration::adapters::in_memory::form_fields_in_memory::InMemoryFormFields;
use crate::modules::registration::adapters::outbound::http_gateway::HttpRegistrationGateway;
use crate::modules::registration::core::form::REGISTER_FORM_ID;
use crate::modules::registration::core::request::RegistrationRequest;
use crate::modules::registration::use_cases::submit_registration::event::SubmitEvent;
use crate::modules::registration::use_cases::submit_registration::handler::SubmitRegistrationHandler;
use crate::modules::registration::use_cases::submit_registration::inbound::bindings::FormBindings;
use crate::modules::registration::use_cases::submit_registration::outcome::SubmissionOutcome;
use crate::modules::registration::use_cases::submit_registration::ports::PageEffects;

/// Binds a submit handler to the registration form and fires one submit event, with the
/// command line values standing in for the page inputs.
pub async fn run<TEffects>(
    base_url: &str,
    request: &RegistrationRequest,
    effects: Arc<TEffects>,
) -> anyhow::Result<SubmissionOutcome>
where
    TEffects: PageEffects + 'static,
{
    let gateway = HttpRegistrationGateway::new(base_url)?;
    tracing::info!(endpoint = %gateway.endpoint(), "submitting registration");

    let handler = SubmitRegistrationHandler::new(
        Arc::new(InMemoryFormFields::from_request(request)),
        Arc::new(gateway),
        effects,
    );
    let mut bindings = FormBindings::new();
    bindings.bind(REGISTER_FORM_ID, Arc::new(handler));

    let mut event = SubmitEvent::new(REGISTER_FORM_ID);
    bindings
        .dispatch(&mut event)
        .await
        .ok_or_else(|| anyhow::anyhow!("no submit listener bound to {REGISTER_FORM_ID}"))
}
