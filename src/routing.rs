//! Application router configuration with protected and unprotected route
//! definitions.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    auth::{auth_guard, auth_guard_hx, get_log_in_page, get_log_out, post_log_in},
    endpoints,
    not_found::get_404_not_found,
    state::AuthState,
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TransactionStore + Send + Sync + 'static,
{
    let auth_state = AuthState {
        cookie_key: state.cookie_key.clone(),
        cookie_duration: state.cookie_duration,
        password_hash: state.password_hash.clone(),
    };

    let unprotected_routes = Router::new()
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out));

    let protected_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page::<S>))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_guard,
        ));

    // These routes need to use the HX-Redirect header for auth redirects to
    // work properly for htmx requests.
    let protected_routes = protected_routes.merge(
        Router::new()
            .route(
                endpoints::TRANSACTIONS_API,
                post(create_transaction_endpoint::<S>),
            )
            .route(
                endpoints::DELETE_TRANSACTION,
                delete(delete_transaction_endpoint::<S>),
            )
            .layer(middleware::from_fn_with_state(auth_state, auth_guard_hx)),
    );

    protected_routes
        .merge(unprotected_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}

#[cfg(test)]
mod routing_tests {
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        AppState, endpoints,
        test_utils::{assert_valid_html, store::FakeTransactionStore},
    };

    use super::build_router;

    const TEST_PASSWORD: &str = "hunter2";

    fn get_test_server() -> (TestServer, FakeTransactionStore) {
        let store = FakeTransactionStore::new();
        // Use the minimum cost so that the tests stay fast.
        let password_hash = bcrypt::hash(TEST_PASSWORD, 4).unwrap();
        let state = AppState::new("test cookie secret", password_hash, store.clone());

        let server =
            TestServer::new(build_router(state));

        (server, store)
    }

    async fn log_in(server: &TestServer) {
        let response = server
            .post(endpoints::LOG_IN_API)
            .form(&[("password", TEST_PASSWORD)])
            .await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn root_redirects_to_transactions_page_when_logged_in() {
        let (mut server, _) = get_test_server();
        server.save_cookies();
        log_in(&server).await;

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::TRANSACTIONS_VIEW);
    }

    #[tokio::test]
    async fn transactions_page_requires_log_in() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_VIEW).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::LOG_IN_VIEW);
    }

    #[tokio::test]
    async fn transaction_api_uses_hx_redirect_when_not_logged_in() {
        let (server, store) = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("date", "2024-07-01"), ("payee", "Landlord")])
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("hx-redirect"), endpoints::LOG_IN_VIEW);
        assert_eq!(
            store.create_count(),
            0,
            "unauthenticated requests must not reach the store"
        );
    }

    #[tokio::test]
    async fn full_create_flow_renders_new_transaction() {
        let (mut server, store) = get_test_server();
        server.save_cookies();
        log_in(&server).await;

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[
                ("date", "2024-07-01"),
                ("payee", "Landlord"),
                ("category", "Rent"),
                ("memo", ""),
                ("inflow", ""),
                ("outflow", "1200"),
            ])
            .await;
        response.assert_status_see_other();
        assert_eq!(response.header("hx-redirect"), endpoints::TRANSACTIONS_VIEW);

        let page = server.get(endpoints::TRANSACTIONS_VIEW).await;
        page.assert_status_ok();
        let html = Html::parse_document(&page.text());
        assert_valid_html(&html);

        let cell_selector = Selector::parse("tbody td").unwrap();
        let cells: Vec<_> = html
            .select(&cell_selector)
            .map(|td| td.text().collect::<String>())
            .collect();
        assert!(cells.contains(&"Landlord".to_string()));
        assert_eq!(store.create_count(), 1);
    }

    #[tokio::test]
    async fn full_delete_flow_empties_table() {
        let (mut server, store) = get_test_server();
        server.save_cookies();
        log_in(&server).await;

        // Create a transaction, find its delete endpoint in the page, then
        // delete it.
        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[
                ("date", "2024-07-01"),
                ("payee", "Landlord"),
                ("category", "Rent"),
            ])
            .await
            .assert_status_see_other();

        let page = server.get(endpoints::TRANSACTIONS_VIEW).await;
        let html = Html::parse_document(&page.text());
        let button_selector = Selector::parse("button[hx-delete]").unwrap();
        let delete_url = html
            .select(&button_selector)
            .next()
            .expect("The page should have a delete button")
            .value()
            .attr("hx-delete")
            .unwrap()
            .to_owned();

        let response = server.delete(&delete_url).await;
        response.assert_status_see_other();
        assert_eq!(store.delete_count(), 1);

        let page = server.get(endpoints::TRANSACTIONS_VIEW).await;
        let html = Html::parse_document(&page.text());
        let row_selector = Selector::parse("tbody tr").unwrap();
        assert_eq!(
            html.select(&row_selector).count(),
            1,
            "only the trailing editable row should remain"
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let (server, _) = get_test_server();

        let response = server.get("/this/does/not/exist").await;

        response.assert_status_not_found();
    }
}
