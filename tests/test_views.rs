use actix_web::test as actix_test;
use actix_web::{http::StatusCode, web, App};
use kube::runtime::reflector;
use kube::runtime::watcher::Event;
use tokio_test::block_on;

use kfservice_snapshot::crd::kfservice::{KFService, KFServiceList};
use kfservice_snapshot::{views, Controller};

mod helpers;

// Controller over a cache already holding `kfservices`
fn controller_with(kfservices: Vec<KFService>) -> Controller {
    let mut writer = reflector::store::Writer::<KFService>::default();
    let reader = writer.as_reader();
    for kfservice in kfservices {
        writer.apply_watcher_event(&Event::Applied(kfservice));
    }
    Controller::new(reader)
}

#[test]
fn test_view_health() {
    block_on(async {
        let req = actix_test::TestRequest::default().to_http_request();
        let resp = views::health(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    })
}

#[test]
fn test_state_is_sorted_working_copies() {
    let controller = controller_with(vec![
        helpers::tensorflow_kfservice("c"),
        helpers::tensorflow_kfservice("a"),
        helpers::tensorflow_kfservice("b"),
    ]);

    let mut state = controller.kfservice_state();
    let names: Vec<_> = state.items.iter().map(|k| k.metadata.name.clone().unwrap()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    // Mutating a hand-out never reaches the cache
    state.items[0].spec.default = None;
    state.items[0].status.as_mut().unwrap().conditions.clear();
    let fresh = controller.kfservice_state();
    assert!(fresh.items[0].spec.default.is_some());
    assert_eq!(fresh.items[0].status.as_ref().unwrap().conditions.len(), 2);
}

#[test]
fn test_get_kfservice() {
    let controller = controller_with(vec![helpers::example_kfservice()]);

    let mut found = controller.kfservice("flowers-sample").expect("flowers-sample is not cached");
    assert_eq!(found, helpers::example_kfservice());
    found.spec.canary_traffic_percent = 100;
    assert_eq!(controller.kfservice("flowers-sample").unwrap().spec.canary_traffic_percent, 10);

    assert!(controller.kfservice("missing").is_none());
}

#[test]
fn test_empty_cache() {
    let controller = controller_with(vec![]);
    assert!(controller.kfservice_state().items.is_empty());
    assert!(controller.kfservice("flowers-sample").is_none());
}

#[actix_rt::test]
async fn test_view_kfservices() {
    let data = web::Data::new(controller_with(vec![
        helpers::example_kfservice(),
        helpers::tensorflow_kfservice("iris"),
    ]));
    let app = actix_test::init_service(
        App::new()
            .app_data(data)
            .service(web::resource("/kfservices").to(views::kfservices))
            .service(web::resource("/kfservices/{name}").to(views::get_kfservice)),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/kfservices").to_request();
    let resp: KFServiceList = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0], helpers::example_kfservice());

    let req = actix_test::TestRequest::get().uri("/kfservices/flowers-sample").to_request();
    let resp: Option<KFService> = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp, Some(helpers::example_kfservice()));

    let req = actix_test::TestRequest::get().uri("/kfservices/missing").to_request();
    let resp: Option<KFService> = actix_test::call_and_read_body_json(&app, req).await;
    assert!(resp.is_none());
}
