use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;

use serialize::to_form_submission;

use crate::settings::HubspotSettings;
use crate::widget::LeadSubmission;

#[derive(Debug, Clone)]
pub struct HubspotForms {
    client: ClientWithMiddleware,
    base_url: String,
    portal_id: String,
    form_id: String,
}

impl HubspotForms {
    pub fn new(settings: &HubspotSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        let client = reqwest_middleware::ClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            portal_id: settings.portal_id.clone(),
            form_id: settings.form_id.clone(),
        })
    }

    pub async fn submit(&self, submission: &LeadSubmission) -> anyhow::Result<()> {
        let url = format!(
            "{}/submissions/v3/integration/submit/{}/{}",
            self.base_url, self.portal_id, self.form_id
        );
        let payload = to_form_submission(submission);

        let response = self.client.post(url).json(&payload).send().await?;
        let status = response.error_for_status()?.status();
        tracing::info!("Lead submitted to HubSpot form {}: {}", self.form_id, status);

        Ok(())
    }

    //Fire-and-forget, a failed submission only ends up in the log
    pub fn submit_in_background(&self, submission: LeadSubmission) {
        let forms = self.clone();
        tokio::spawn(async move {
            if let Err(e) = forms.submit(&submission).await {
                tracing::warn!("Error submitting lead to HubSpot: {:?}", e);
            }
        });
    }
}

mod serialize {
    use serde::Serialize;

    use crate::widget::LeadSubmission;

    pub fn to_form_submission(submission: &LeadSubmission) -> FormSubmission {
        let name = submission.lead.name.trim();
        let firstname = name.split_whitespace().next().unwrap_or("").to_owned();
        let rest = name
            .split_whitespace()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ");
        //HubSpot requires a lastname, single-word names get a dash
        let lastname = if rest.is_empty() { "-".to_owned() } else { rest };

        FormSubmission {
            fields: vec![
                FormField {
                    name: "firstname",
                    value: firstname,
                },
                FormField {
                    name: "lastname",
                    value: lastname,
                },
                FormField {
                    name: "email",
                    value: submission.lead.email.clone(),
                },
                FormField {
                    name: "phone",
                    value: submission.lead.phone.clone(),
                },
            ],
            context: FormContext {
                page_uri: submission.page.uri.clone(),
                page_name: submission.page.title.clone(),
            },
        }
    }

    #[derive(Serialize, Debug)]
    pub struct FormSubmission {
        fields: Vec<FormField>,
        context: FormContext,
    }

    #[derive(Serialize, Debug)]
    struct FormField {
        name: &'static str,
        value: String,
    }

    #[derive(Serialize, Debug)]
    struct FormContext {
        #[serde(rename = "pageUri")]
        page_uri: String,

        #[serde(rename = "pageName")]
        page_name: String,
    }

}
