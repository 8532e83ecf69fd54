//! Book HTTP Handlers

use axum::Json;

use crate::domain::canon::Book;
use crate::infrastructure::http::dto::{ApiResponse, BookResponse};

/// 列出正典全部书卷（正典顺序）
pub async fn list_books() -> Json<ApiResponse<Vec<BookResponse>>> {
    let books = Book::ALL.iter().copied().map(BookResponse::from).collect();
    Json(ApiResponse::success(books))
}
