use rocket::http::{Header, Method, Status};
use rocket::route::{Handler, Outcome, Route};
use rocket::serde::json::Json;
use rocket::{Data, Request};

use crate::model::response::ApiResponse;

/// every method a gate can answer for
static METHODS: [Method; 7] = [
    Method::Get,
    Method::Head,
    Method::Post,
    Method::Put,
    Method::Delete,
    Method::Patch,
    Method::Options,
];

#[derive(Responder)]
#[response(status = 405, content_type = "json")]
struct MethodNotAllowedResponse {
    body: Json<ApiResponse>,
    allow: Header<'static>,
}

/// Answers every method that `uri` doesn't accept with a 405 and the json envelope.
/// Mount it next to the routes that do handle `uri`; it only registers routes for the other methods.
///
/// Allowing GET also allows HEAD, since rocket answers HEAD with the GET route
#[derive(Clone)]
pub struct MethodGate {
    uri: String,
    allowed: Vec<Method>,
}

impl MethodGate {
    pub fn new(uri: &str, allowed: &[Method]) -> MethodGate {
        let mut allowed = allowed.to_vec();
        if allowed.contains(&Method::Get) && !allowed.contains(&Method::Head) {
            allowed.push(Method::Head);
        }
        MethodGate {
            uri: uri.to_string(),
            allowed,
        }
    }

    fn allow_header(&self) -> Header<'static> {
        let allowed = self
            .allowed
            .iter()
            .map(|method| method.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        Header::new("Allow", allowed)
    }
}

#[rocket::async_trait]
impl Handler for MethodGate {
    async fn handle<'r>(&self, req: &'r Request<'_>, _data: Data<'r>) -> Outcome<'r> {
        log::warn!(
            "{} endpoint was called with wrong HTTP method {}",
            req.uri().path(),
            req.method()
        );
        let response = MethodNotAllowedResponse {
            body: ApiResponse::error(Status::MethodNotAllowed, "Method Not Allowed"),
            allow: self.allow_header(),
        };
        Outcome::from(req, response)
    }
}

impl From<MethodGate> for Vec<Route> {
    fn from(gate: MethodGate) -> Self {
        METHODS
            .iter()
            .filter(|method| !gate.allowed.contains(*method))
            .map(|method| Route::new(*method, &gate.uri, gate.clone()))
            .collect()
    }
}
