use std::cell::RefCell;

use form_validation_rs::prelude::*;
use form_validation_rs::{
    ContactConfig, ContactForm, ContactSubmission, DispatchError, DispatchReceipt,
    MailDispatcher, SubmitError, TemplateParams,
};
use mockall::mock;
use portfolio_config_rs::EmailServiceConfig;

mock! {
    pub Dispatcher {}

    impl MailDispatcher for Dispatcher {
        fn send(
            &self,
            service_id: &str,
            template_id: &str,
            params: &TemplateParams,
        ) -> Result<DispatchReceipt, DispatchError>;
    }
}

/// Keeps every parameter map it was asked to send
#[derive(Default)]
struct RecordingDispatcher {
    sent: RefCell<Vec<TemplateParams>>,
}

impl MailDispatcher for RecordingDispatcher {
    fn send(
        &self,
        _service_id: &str,
        _template_id: &str,
        params: &TemplateParams,
    ) -> Result<DispatchReceipt, DispatchError> {
        self.sent.borrow_mut().push(params.clone());
        Ok(DispatchReceipt {
            status: 200,
            text: "OK".to_string(),
        })
    }
}

fn contact_form(locale: Locale) -> ContactForm {
    ContactForm::new(
        ContactConfig::new(EmailServiceConfig {
            public_key: "test_public_key".to_string(),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
        })
        .with_locale(locale),
    )
}

#[test]
fn test_complete_contact_flow() {
    let form = contact_form(Locale::Es);
    let dispatcher = RecordingDispatcher::default();

    let submission = ContactSubmission::from_json(
        r#"{
            "name": "  Grace Hopper ",
            "email": "grace@navy.mil",
            "phone": "555 010 9999",
            "website": "https://grace.example.org",
            "message": "<p>Let's build a compiler together.</p>"
        }"#,
    )
    .expect("valid json");

    let receipt = form.submit(&submission, &dispatcher).expect("dispatched");
    assert_eq!(receipt.status, 200);

    let sent = dispatcher.sent.borrow();
    assert_eq!(sent.len(), 1);
    let params = &sent[0];
    assert_eq!(params["from_name"], "Grace Hopper");
    assert_eq!(params["phone"], "5550109999");
    assert_eq!(params["website"], "https://grace.example.org");
    assert_eq!(
        params["message"],
        "&lt;p&gt;Let&#39;s build a compiler together.&lt;/p&gt;"
    );
}

#[test]
fn test_invalid_submission_reports_messages_and_skips_dispatch() {
    let form = contact_form(Locale::Es);
    let mut dispatcher = MockDispatcher::new();
    dispatcher.expect_send().never();

    let submission = ContactSubmission {
        name: "Grace".to_string(),
        email: "grace-at-navy".to_string(),
        phone: String::new(),
        website: String::new(),
        message: "Hi".to_string(),
    };

    let report = match form.submit(&submission, &dispatcher) {
        Err(SubmitError::Invalid(report)) => report,
        other => panic!("Expected invalid submission, got {:?}", other),
    };

    let fields: Vec<FieldKind> = report.errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![FieldKind::Email, FieldKind::Message]);
    assert_eq!(
        report.error_for(FieldKind::Email).map(|e| e.message.as_str()),
        Some("Por favor ingresa un email válido")
    );
    assert_eq!(
        report.error_for(FieldKind::Message).map(|e| e.message.as_str()),
        Some("Debe tener al menos 10 caracteres")
    );
}

#[test]
fn test_dispatch_failure_keeps_status() {
    let form = contact_form(Locale::En);
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_send()
        .times(1)
        .returning(|_, _, _| {
            Err(DispatchError {
                status: 503,
                text: "service unavailable".to_string(),
            })
        });

    let submission = ContactSubmission {
        name: "Grace".to_string(),
        email: "grace@navy.mil".to_string(),
        message: "A message long enough.".to_string(),
        ..Default::default()
    };

    match form.submit(&submission, &dispatcher) {
        Err(SubmitError::Dispatch(err)) => assert_eq!(err.status, 503),
        other => panic!("Expected dispatch failure, got {:?}", other),
    }
}

#[test]
fn test_message_lookup_for_glue_code() {
    let opts = MessageOptions::new().with_min(5.0);
    let msg = get_validation_message("x", "minLength", &opts);
    assert!(msg.contains('5'));
    assert_eq!(
        get_validation_message("x", "unknownRule", &opts),
        "Campo inválido"
    );
}
