#![cfg(test)]
use std::time::Duration;

use cepr_common::address::Service;
use cepr_common::cep::Cep;
use cepr_common::config::Config;
use cepr_common::error::ProviderError;
use cepr_core::lookup::{self, LookupOutcome};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CEP: &str = "01001000";

fn cep() -> Cep {
    CEP.parse().unwrap()
}

/// Config pointing both providers at local mock servers.
fn config_for(brasil_api: &MockServer, via_cep: &MockServer, timeout_ms: u64) -> Config {
    Config {
        brasil_api_base_url: format!("{}/api/cep/v1/", brasil_api.uri()),
        via_cep_base_url: format!("{}/ws/", via_cep.uri()),
        timeout: Duration::from_millis(timeout_ms),
        quiet: true,
    }
}

async fn mount_brasil_api(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/api/cep/v1/{CEP}")))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_via_cep(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/ws/{CEP}/json")))
        .respond_with(template)
        .mount(server)
        .await;
}

fn brasil_api_body(city: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "cep": CEP,
        "city": city,
        "state": "SP",
        "street": "Praça da Sé",
    }))
}

fn via_cep_body(city: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "cep": "01001-000",
        "localidade": city,
        "uf": "SP",
        "logradouro": "Praça da Sé",
    }))
}

#[tokio::test]
async fn brasil_api_wins_when_it_answers_first() {
    let brasil_api = MockServer::start().await;
    let via_cep = MockServer::start().await;

    mount_brasil_api(&brasil_api, brasil_api_body("São Paulo")).await;
    mount_via_cep(
        &via_cep,
        via_cep_body("São Paulo").set_delay(Duration::from_millis(400)),
    )
    .await;

    let outcome = lookup::perform_lookup(&cep(), &config_for(&brasil_api, &via_cep, 1000)).await;

    match outcome {
        LookupOutcome::Resolved(address) => {
            assert_eq!(address.cep, CEP);
            assert_eq!(address.city, "São Paulo");
            assert_eq!(address.state, "SP");
            assert_eq!(address.service, Service::BrasilApi);
        }
        other => panic!("expected a resolved address, got {other:?}"),
    }
}

#[tokio::test]
async fn via_cep_wins_and_its_field_names_are_mapped() {
    let brasil_api = MockServer::start().await;
    let via_cep = MockServer::start().await;

    mount_brasil_api(
        &brasil_api,
        brasil_api_body("São Paulo").set_delay(Duration::from_millis(400)),
    )
    .await;
    mount_via_cep(&via_cep, via_cep_body("São Paulo")).await;

    let outcome = lookup::perform_lookup(&cep(), &config_for(&brasil_api, &via_cep, 1000)).await;

    match outcome {
        LookupOutcome::Resolved(address) => {
            assert_eq!(address.cep, "01001-000");
            assert_eq!(address.city, "São Paulo");
            assert_eq!(address.state, "SP");
            assert_eq!(address.service, Service::ViaCep);
        }
        other => panic!("expected a resolved address, got {other:?}"),
    }
}

#[tokio::test]
async fn slower_success_is_never_selected_over_the_faster() {
    let brasil_api = MockServer::start().await;
    let via_cep = MockServer::start().await;

    // Both succeed with distinguishable payloads; only the fast one may win.
    mount_brasil_api(&brasil_api, brasil_api_body("Fast City")).await;
    mount_via_cep(
        &via_cep,
        via_cep_body("Slow City").set_delay(Duration::from_millis(500)),
    )
    .await;

    let outcome = lookup::perform_lookup(&cep(), &config_for(&brasil_api, &via_cep, 1000)).await;

    match outcome {
        LookupOutcome::Resolved(address) => {
            assert_eq!(address.city, "Fast City");
            assert_eq!(address.service, Service::BrasilApi);
        }
        other => panic!("expected a resolved address, got {other:?}"),
    }
}

#[tokio::test]
async fn timeout_when_neither_service_answers_in_time() {
    let brasil_api = MockServer::start().await;
    let via_cep = MockServer::start().await;

    mount_brasil_api(
        &brasil_api,
        brasil_api_body("São Paulo").set_delay(Duration::from_secs(2)),
    )
    .await;
    mount_via_cep(
        &via_cep,
        via_cep_body("São Paulo").set_delay(Duration::from_secs(2)),
    )
    .await;

    let outcome = lookup::perform_lookup(&cep(), &config_for(&brasil_api, &via_cep, 100)).await;

    assert!(matches!(outcome, LookupOutcome::TimedOut));
}

#[tokio::test]
async fn malformed_json_does_not_crash_and_the_other_service_wins() {
    let brasil_api = MockServer::start().await;
    let via_cep = MockServer::start().await;

    mount_brasil_api(
        &brasil_api,
        ResponseTemplate::new(200).set_body_string("definitely not json"),
    )
    .await;
    mount_via_cep(
        &via_cep,
        via_cep_body("São Paulo").set_delay(Duration::from_millis(100)),
    )
    .await;

    let outcome = lookup::perform_lookup(&cep(), &config_for(&brasil_api, &via_cep, 1000)).await;

    match outcome {
        LookupOutcome::Resolved(address) => assert_eq!(address.service, Service::ViaCep),
        other => panic!("expected the healthy service to win, got {other:?}"),
    }
}

#[tokio::test]
async fn both_services_failing_reports_both_errors_without_waiting() {
    let brasil_api = MockServer::start().await;
    let via_cep = MockServer::start().await;

    mount_brasil_api(&brasil_api, ResponseTemplate::new(500)).await;
    mount_via_cep(
        &via_cep,
        ResponseTemplate::new(200).set_body_json(json!({ "erro": "true" })),
    )
    .await;

    // Deadline far above the response times: Failed must arrive early,
    // not as a timeout.
    let outcome = lookup::perform_lookup(&cep(), &config_for(&brasil_api, &via_cep, 5000)).await;

    match outcome {
        LookupOutcome::Failed(failures) => {
            assert_eq!(failures.len(), 2);
            let brasil_err = failures
                .iter()
                .find(|(service, _)| *service == Service::BrasilApi)
                .map(|(_, err)| err)
                .unwrap();
            let via_cep_err = failures
                .iter()
                .find(|(service, _)| *service == Service::ViaCep)
                .map(|(_, err)| err)
                .unwrap();

            assert!(matches!(brasil_err, ProviderError::Status(500)));
            assert!(matches!(via_cep_err, ProviderError::NotFound));
        }
        other => panic!("expected both failures to surface, got {other:?}"),
    }
}

#[tokio::test]
async fn brasil_api_404_maps_to_not_found() {
    let brasil_api = MockServer::start().await;
    let via_cep = MockServer::start().await;

    mount_brasil_api(&brasil_api, ResponseTemplate::new(404)).await;
    mount_via_cep(&via_cep, ResponseTemplate::new(500)).await;

    let outcome = lookup::perform_lookup(&cep(), &config_for(&brasil_api, &via_cep, 5000)).await;

    match outcome {
        LookupOutcome::Failed(failures) => {
            let brasil_err = failures
                .iter()
                .find(|(service, _)| *service == Service::BrasilApi)
                .map(|(_, err)| err)
                .unwrap();
            assert!(matches!(brasil_err, ProviderError::NotFound));
        }
        other => panic!("expected an explicit failure, got {other:?}"),
    }
}
