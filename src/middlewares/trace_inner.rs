use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::core::TraceId;
use crate::middlewares::trace_middleware::{is_acceptable_trace_id, TRACE_ID_HEADER};

/// 실제 trace id 부여 로직을 수행하는 서비스
pub struct TraceMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TraceMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let trace_id = match req
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|h| h.to_str().ok())
            {
                Some(value) if is_acceptable_trace_id(value) => TraceId(value.to_string()),
                Some(value) => {
                    log::debug!("잘못된 trace id 헤더 무시: {:?}", value);
                    TraceId::generate()
                }
                None => TraceId::generate(),
            };

            log::debug!("[{}] {} {}", trace_id.0, req.method(), req.path());
            req.extensions_mut().insert(trace_id.clone());

            let mut res = service.call(req).await?;

            if let Ok(value) = HeaderValue::from_str(&trace_id.0) {
                res.headers_mut()
                    .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
            }

            Ok(res)
        })
    }
}
