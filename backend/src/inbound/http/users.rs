//! User API handlers.
//!
//! ```text
//! GET  /get-users/?min_age=18&max_age=30
//! POST /create-user/ {"name":"Ada","surname":"Lovelace","age":36}
//! ```

use actix_web::{get, post, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{AgeRange, Error, NewUser, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query parameters for `GET /get-users/`. Both bounds are inclusive.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Minimum age; `0` is a real bound.
    pub min_age: Option<i32>,
    /// Maximum age.
    pub max_age: Option<i32>,
}

/// List users, optionally filtered by age.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use picnic_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/get-users/",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Users ordered by id", body = [User]),
        (status = 400, description = "Non-integer age bound", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["user"],
    operation_id = "listUsers"
)]
#[get("/get-users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    params: web::Query<ListUsersParams>,
) -> ApiResult<web::Json<Vec<User>>> {
    let ListUsersParams { min_age, max_age } = params.into_inner();
    let users = state
        .users_query
        .list_users(AgeRange::new(min_age, max_age))
        .await?;
    Ok(web::Json(users))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/create-user/",
    request_body = NewUser,
    responses(
        (status = 200, description = "Stored user", body = User),
        (status = 400, description = "Malformed body", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["user"],
    operation_id = "createUser"
)]
#[post("/create-user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<NewUser>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.create_user(payload.into_inner()).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::inbound::http::test_utils::{MockPorts, json_body, send};
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::json;

    fn ada() -> User {
        User {
            id: UserId::new(3),
            name: "Ada".to_owned(),
            surname: "Lovelace".to_owned(),
            age: 36,
        }
    }

    #[rstest]
    #[case("/get-users/", AgeRange::new(None, None))]
    #[case("/get-users/?min_age=30&max_age=30", AgeRange::new(Some(30), Some(30)))]
    #[case("/get-users/?min_age=0", AgeRange::new(Some(0), None))]
    #[case("/get-users?max_age=17", AgeRange::new(None, Some(17)))]
    #[actix_web::test]
    async fn list_users_forwards_age_bounds(#[case] uri: &str, #[case] expected: AgeRange) {
        let mut ports = MockPorts::default();
        ports
            .users_query
            .expect_list_users()
            .with(eq(expected))
            .times(1)
            .returning(|_| Ok(vec![ada()]));

        let res = send(ports, TestRequest::get().uri(uri)).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            json_body(res).await,
            json!([{ "id": 3, "name": "Ada", "surname": "Lovelace", "age": 36 }])
        );
    }

    #[actix_web::test]
    async fn non_integer_age_is_bad_request() {
        let mut ports = MockPorts::default();
        ports.users_query.expect_list_users().times(0);

        let res = send(ports, TestRequest::get().uri("/get-users/?min_age=old")).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn create_user_returns_stored_user() {
        let mut ports = MockPorts::default();
        ports
            .users
            .expect_create_user()
            .with(eq(NewUser {
                name: "Ada".to_owned(),
                surname: "Lovelace".to_owned(),
                age: 36,
            }))
            .times(1)
            .returning(|_| Ok(ada()));

        let res = send(
            ports,
            TestRequest::post()
                .uri("/create-user/")
                .set_json(json!({ "name": "Ada", "surname": "Lovelace", "age": 36 })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await["id"], 3);
    }

    #[rstest]
    #[case(json!({ "name": "Ada", "surname": "Lovelace" }))]
    #[case(json!({ "name": "Ada", "surname": "Lovelace", "age": "old" }))]
    #[actix_web::test]
    async fn malformed_user_body_is_bad_request(#[case] body: serde_json::Value) {
        let mut ports = MockPorts::default();
        ports.users.expect_create_user().times(0);

        let res = send(
            ports,
            TestRequest::post().uri("/create-user/").set_json(body),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await["code"], "invalid_request");
    }
}
