pub mod request {
    use crate::{modules::order::repository::OrderStatus, utils::pagination::Pagination};
    use serde::Deserialize;

    /// Admin order filter. Omitting it shows orders still waiting for a
    /// decision; `all` drops the filter.
    #[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
    #[serde(rename_all = "snake_case")]
    pub enum StatusFilter {
        All,
        #[default]
        Pending,
        Confirmed,
        Preparing,
        OutForDelivery,
        Delivered,
    }

    impl StatusFilter {
        pub fn status(self) -> Option<OrderStatus> {
            match self {
                StatusFilter::All => None,
                StatusFilter::Pending => Some(OrderStatus::Pending),
                StatusFilter::Confirmed => Some(OrderStatus::Confirmed),
                StatusFilter::Preparing => Some(OrderStatus::Preparing),
                StatusFilter::OutForDelivery => Some(OrderStatus::OutForDelivery),
                StatusFilter::Delivered => Some(OrderStatus::Delivered),
            }
        }
    }

    #[derive(Deserialize)]
    pub struct Filters {
        #[serde(default)]
        pub status: StatusFilter,
    }

    pub struct Payload {
        pub pagination: Pagination,
        pub filters: Filters,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{modules::order::repository::FullOrder, utils::pagination::Paginated};

    pub enum Success {
        Orders(Paginated<FullOrder>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders(orders) => (StatusCode::OK, Json(json!(orders))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchOrders,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOrders => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch orders" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::{Filters, StatusFilter};
    use crate::modules::order::repository::OrderStatus;
    use axum::extract::Query;
    use axum::http::Uri;

    fn filters(uri: &str) -> Filters {
        let uri: Uri = uri.parse().unwrap();
        Query::<Filters>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn pending_orders_are_listed_by_default() {
        assert_eq!(filters("/api/admin/orders").status, StatusFilter::Pending);
        assert_eq!(
            filters("/api/admin/orders").status.status(),
            Some(OrderStatus::Pending)
        );
    }

    #[test]
    fn all_lifts_the_status_filter() {
        assert_eq!(filters("/api/admin/orders?status=all").status.status(), None);
        assert_eq!(
            filters("/api/admin/orders?status=out_for_delivery").status.status(),
            Some(OrderStatus::OutForDelivery)
        );
    }
}
