use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// A user record, matching the jsonplaceholder wire shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// A post record. Field names follow the jsonplaceholder JSON form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct CreatePost {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct UpdatePost {
    #[serde(rename = "userId")]
    pub user_id: Option<u64>,
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Default)]
pub struct Store {
    pub users: HashMap<u64, User>,
    pub posts: HashMap<u64, Post>,
    pub next_post_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

fn user(id: u64, name: &str, username: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
    }
}

fn post(user_id: u64, id: u64, title: &str, body: &str) -> Post {
    Post {
        user_id,
        id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Seed the store with jsonplaceholder's first sample records.
fn seed() -> Store {
    let mut store = Store::default();
    for u in [
        user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
        user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
    ] {
        store.users.insert(u.id, u);
    }
    for p in [
        post(1, 1, "sunt aut facere repellat", "quia et suscipit recusandae"),
        post(1, 2, "qui est esse", "est rerum tempore vitae"),
    ] {
        store.posts.insert(p.id, p);
    }
    store.next_post_id = 3;
    store
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(seed()));
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(replace_post).patch(update_post).delete(delete_post),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    let mut users: Vec<User> = store.users.values().cloned().collect();
    users.sort_by_key(|u| u.id);
    Json(users)
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store.users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    let mut posts: Vec<Post> = store.posts.values().cloned().collect();
    posts.sort_by_key(|p| p.id);
    Json(posts)
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    let store = db.read().await;
    store.posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    let post = Post {
        user_id: input.user_id,
        id: store.next_post_id,
        title: input.title,
        body: input.body,
    };
    store.next_post_id += 1;
    store.posts.insert(post.id, post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn replace_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<CreatePost>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    if !store.posts.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let post = Post {
        user_id: input.user_id,
        id,
        title: input.title,
        body: input.body,
    };
    store.posts.insert(id, post.clone());
    Ok(Json(post))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdatePost>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(user_id) = input.user_id {
        post.user_id = user_id;
    }
    if let Some(title) = input.title {
        post.title = title;
    }
    if let Some(body) = input.body {
        post.body = body;
    }
    Ok(Json(post.clone()))
}

async fn delete_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.posts.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
