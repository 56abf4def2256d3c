//! The log in page and endpoint.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;
use maud::html;
use serde::Deserialize;

use crate::{
    Error,
    auth::cookie::set_session_cookie,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base, render},
    state::AuthState,
};

/// Display the log in form.
pub(crate) async fn get_log_in_page() -> Response {
    let content = html! {
        div class="flex flex-col items-center justify-center px-6 py-8 mx-auto"
        {
            div class="w-full bg-white rounded-lg shadow dark:border md:mt-0 sm:max-w-md xl:p-0 dark:bg-gray-800 dark:border-gray-700"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h1 class="text-xl font-bold leading-tight tracking-tight text-gray-900 md:text-2xl dark:text-white"
                    {
                        "Log in"
                    }

                    form
                        hx-post=(endpoints::LOG_IN_API)
                        hx-target-error="#alert-container"
                        class="space-y-4 md:space-y-6"
                    {
                        div
                        {
                            label for="password" class=(FORM_LABEL_STYLE) { "Password" }

                            input
                                type="password"
                                name="password"
                                id="password"
                                placeholder="••••••••"
                                class=(FORM_TEXT_INPUT_STYLE)
                                required
                                autofocus;
                        }

                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Log in" }
                    }
                }
            }
        }
    };

    render(StatusCode::OK, base("Log in", &content))
}

#[derive(Deserialize)]
pub(crate) struct LogInForm {
    password: String,
}

/// Check the submitted password against the configured hash and start a
/// session on success.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidCredentials] if the password is wrong,
/// - [Error::HashingError] if the hash comparison itself failed.
pub(crate) async fn post_log_in(
    State(state): State<AuthState>,
    jar: PrivateCookieJar,
    Form(form): Form<LogInForm>,
) -> Result<Response, Error> {
    let is_valid = bcrypt::verify(&form.password, &state.password_hash)
        .map_err(|error| Error::HashingError(error.to_string()))?;

    if !is_valid {
        return Err(Error::InvalidCredentials);
    }

    let jar = set_session_cookie(jar, state.cookie_duration)?;

    Ok((
        jar,
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::OK,
    )
        .into_response())
}
