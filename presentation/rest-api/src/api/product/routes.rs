use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, DeleteConfirmationResponse, ProductResponse, UpdateProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product management API
///
/// Endpoints for creating, reading, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Persists a new product and returns it with its assigned identifier.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            price: body.0.price,
            quantity: body.0.quantity,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns every product currently in the catalog.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product by its unique identifier.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces the descriptive fields of an existing product.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: id.0,
            name: body.0.name,
            price: body.0.price,
            quantity: body.0.quantity,
            description: body.0.description,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product and returns a confirmation message.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(message) => DeleteProductResponse::Ok(Json(DeleteConfirmationResponse { message })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteConfirmationResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;

    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use business::application::product::create::CreateProductUseCaseImpl;
    use business::application::product::delete::DeleteProductUseCaseImpl;
    use business::application::product::get_all::GetAllProductsUseCaseImpl;
    use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
    use business::application::product::update::UpdateProductUseCaseImpl;
    use business::domain::logger::Logger;
    use business::domain::product::repository::ProductRepository;
    use logger::TracingLogger;
    use persistence::product::memory::ProductRepositoryInMemory;

    fn test_client() -> TestClient<Route> {
        let repository: Arc<dyn ProductRepository> = Arc::new(ProductRepositoryInMemory::new());
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl { repository, logger }),
        );

        let service = OpenApiService::new(api, "Product Catalog API", "0.1.0");
        TestClient::new(Route::new().nest("/api", service))
    }

    #[tokio::test]
    async fn should_serve_product_lifecycle_under_api_prefix() {
        let cli = test_client();

        let resp = cli
            .post("/api/products")
            .body_json(&json!({ "name": "Pen", "price": 1.50, "quantity": 10 }))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        let created = resp.json().await;
        created.value().object().get("id").assert_i64(1);
        created.value().object().get("name").assert_string("Pen");

        let resp = cli.get("/api/products").send().await;
        resp.assert_status_is_ok();
        let listed = resp.json().await;
        assert_eq!(listed.value().object_array().len(), 1);

        let resp = cli
            .put("/api/products/1")
            .body_json(&json!({ "name": "Gel Pen", "price": 2.10, "quantity": 7 }))
            .send()
            .await;
        resp.assert_status_is_ok();
        let updated = resp.json().await;
        updated.value().object().get("name").assert_string("Gel Pen");

        let resp = cli.delete("/api/products/1").send().await;
        resp.assert_status_is_ok();
        let confirmation = resp.json().await;
        confirmation
            .value()
            .object()
            .get("message")
            .assert_string("product 1 deleted");

        let resp = cli.get("/api/products/1").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_blank_name_with_bad_request() {
        let cli = test_client();

        let resp = cli
            .post("/api/products")
            .body_json(&json!({ "name": "  ", "price": 1.0, "quantity": 1 }))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        let body = resp.json().await;
        body.value()
            .object()
            .get("name")
            .assert_string("ValidationError");
    }

    #[tokio::test]
    async fn should_not_serve_routes_outside_api_prefix() {
        let cli = test_client();

        let resp = cli.get("/products").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
