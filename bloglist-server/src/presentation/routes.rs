use actix_web::{HttpResponse, error::InternalError, web};
use serde_json::json;

use crate::application::blog_service::BlogService;
use crate::application::user_service::UserService;
use crate::data::blog_repository::BlogRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::presentation::handlers::{self, blogs, health, users};

/// Registers the `/api` routes, their shared state and the JSON/path error handlers.
pub fn configure<B, U>(
    blog_service: BlogService<B>,
    user_service: UserService<U>,
) -> impl FnOnce(&mut web::ServiceConfig)
where
    B: BlogRepository + 'static,
    U: UserRepository + 'static,
{
    move |cfg| {
        cfg.app_data(web::Data::new(blog_service))
            .app_data(web::Data::new(user_service))
            .app_data(json_config())
            .app_data(path_config())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health::health))
                    .service(
                        web::resource("/blogs")
                            .route(web::get().to(blogs::list_blogs::<B>))
                            .route(web::post().to(blogs::create_blog::<B>)),
                    )
                    .route("/stats", web::get().to(blogs::blog_stats::<B>))
                    .service(
                        web::resource("/blogs/{id}")
                            .route(web::put().to(blogs::update_blog::<B>))
                            .route(web::delete().to(blogs::delete_blog::<B>)),
                    )
                    .service(
                        web::resource("/users")
                            .route(web::get().to(users::list_users::<U>))
                            .route(web::post().to(users::register_user::<U>)),
                    ),
            )
            .default_service(web::to(handlers::unknown_endpoint));
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| DomainError::Validation(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": "malformatted id" })),
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory::{InMemoryBlogRepository, InMemoryUserRepository};
    use crate::domain::blog::{Blog, NewBlog};
    use crate::presentation::dto::UserResponse;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    struct Fixture {
        blogs: Arc<InMemoryBlogRepository>,
        users: Arc<InMemoryUserRepository>,
    }

    impl Fixture {
        async fn seeded() -> Self {
            let blogs = Arc::new(InMemoryBlogRepository::new());
            for (n, likes) in [(1, 3), (2, 7), (3, 5), (4, 0)] {
                blogs
                    .create(Blog::new(NewBlog {
                        title: format!("A test blog title number {n}"),
                        author: Some(format!("tester {n}")),
                        url: format!("http://www.randomtestaddress.com/test{n}"),
                        likes,
                    }))
                    .await
                    .unwrap();
            }
            Self {
                blogs,
                users: Arc::new(InMemoryUserRepository::new()),
            }
        }

        fn routes(&self) -> impl FnOnce(&mut web::ServiceConfig) {
            configure(
                BlogService::new(Arc::clone(&self.blogs)),
                UserService::new(Arc::clone(&self.users)),
            )
        }

        async fn blogs_in_store(&self) -> Vec<Blog> {
            self.blogs.find_all().await.unwrap()
        }
    }

    const INITIAL_BLOGS: usize = 4;

    #[actix_web::test]
    async fn blogs_are_returned_as_json() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/blogs").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("application/json"));
    }

    #[actix_web::test]
    async fn all_saved_blogs_are_returned_with_id_field() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let body: Vec<Value> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/blogs").to_request()).await;

        assert_eq!(body.len(), INITIAL_BLOGS);
        for blog in &body {
            assert!(blog.get("id").is_some());
            assert!(blog.get("_id").is_none());
        }
    }

    #[actix_web::test]
    async fn new_blog_is_added() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let new_blog = json!({
            "title": "Interesting blog",
            "author": "M. Find",
            "url": "http://www.interestingblogs.com/find",
            "likes": 10
        });
        let res = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/blogs").set_json(&new_blog).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(res).await;

        let stored = fixture.blogs_in_store().await;
        assert_eq!(stored.len(), INITIAL_BLOGS + 1);

        let mut expected = new_blog.clone();
        expected["id"] = created["id"].clone();
        assert_eq!(created, expected);
        assert!(stored.iter().any(|b| serde_json::to_value(b).unwrap() == expected));
    }

    #[actix_web::test]
    async fn likes_default_to_zero() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(json!({
                "title": "A new blog without likes",
                "author": "N. Find",
                "url": "http://www.interestingblogs.com/nolikes"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["likes"], 0);

        let stored = fixture.blogs_in_store().await;
        let created = stored
            .iter()
            .find(|b| b.title == "A new blog without likes")
            .unwrap();
        assert_eq!(created.likes, 0);
    }

    #[actix_web::test]
    async fn blog_without_title_or_url_is_rejected_and_not_stored() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        for payload in [
            json!({ "author": "M", "url": "http://www.interestingblogs.com/notitle", "likes": 0 }),
            json!({ "title": "A new blog without url", "author": "A", "likes": 0 }),
        ] {
            let req = test::TestRequest::post().uri("/api/blogs").set_json(payload).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(res).await;
            assert_eq!(body, json!({ "error": "title or url missing" }));
        }

        assert_eq!(fixture.blogs_in_store().await.len(), INITIAL_BLOGS);
    }

    #[actix_web::test]
    async fn negative_likes_are_rejected() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(json!({ "title": "t", "url": "http://u", "likes": -1 }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(fixture.blogs_in_store().await.len(), INITIAL_BLOGS);
    }

    #[actix_web::test]
    async fn delete_removes_blog() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;
        let target = fixture.blogs_in_store().await[0].clone();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/blogs/{}", target.id))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        let remaining = fixture.blogs_in_store().await;
        assert_eq!(remaining.len(), INITIAL_BLOGS - 1);
        assert!(remaining.iter().all(|b| b.id != target.id));
    }

    #[actix_web::test]
    async fn delete_of_nonexistent_id_is_no_content() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/blogs/{}", Uuid::new_v4()))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(res).await.is_empty());
        assert_eq!(fixture.blogs_in_store().await.len(), INITIAL_BLOGS);
    }

    #[actix_web::test]
    async fn malformed_id_is_bad_request() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let req = test::TestRequest::delete().uri("/api/blogs/not-a-uuid").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": "malformatted id" }));
    }

    #[actix_web::test]
    async fn non_uuid_ids_are_rejected_the_same_way() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        for id in ["stats", "not-a-uuid", "123"] {
            let uri = format!("/api/blogs/{id}");
            for req in [
                test::TestRequest::delete().uri(&uri).to_request(),
                test::TestRequest::put()
                    .uri(&uri)
                    .set_json(json!({ "likes": 1 }))
                    .to_request(),
            ] {
                let res = test::call_service(&app, req).await;
                assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
                let body: Value = test::read_body_json(res).await;
                assert_eq!(body, json!({ "error": "malformatted id" }));
            }
        }

        assert_eq!(fixture.blogs_in_store().await.len(), INITIAL_BLOGS);
    }

    #[actix_web::test]
    async fn blog_without_author_exposes_null_author() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(json!({ "title": "anonymous", "url": "http://anon.example.com" }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            created,
            json!({
                "id": created["id"].clone(),
                "title": "anonymous",
                "author": null,
                "url": "http://anon.example.com",
                "likes": 0
            })
        );
    }

    #[actix_web::test]
    async fn update_replaces_only_given_fields() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;
        let target = fixture.blogs_in_store().await[1].clone();

        let req = test::TestRequest::put()
            .uri(&format!("/api/blogs/{}", target.id))
            .set_json(json!({ "likes": 42 }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let updated: Blog = test::read_body_json(res).await;
        assert_eq!(updated.id, target.id);
        assert_eq!(updated.likes, 42);
        assert_eq!(updated.title, target.title);
        assert_eq!(updated.url, target.url);
        assert_eq!(updated.author, target.author);
    }

    #[actix_web::test]
    async fn update_of_nonexistent_id_is_not_found() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/blogs/{}", Uuid::new_v4()))
            .set_json(json!({ "likes": 1 }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn stats_report_total_and_favorite() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/stats").to_request(),
        )
        .await;

        assert_eq!(body["total_likes"], 15);
        assert_eq!(
            body["favorite"],
            json!({ "title": "A test blog title number 2", "author": "tester 2", "likes": 7 })
        );
    }

    #[actix_web::test]
    async fn user_is_registered_without_password_in_response() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "username": "mluukkai", "name": "Matti Luukkainen", "password": "salainen" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["username"], "mluukkai");
        assert_eq!(body["name"], "Matti Luukkainen");
        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());

        let listed: Vec<UserResponse> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].username, "mluukkai");
    }

    #[actix_web::test]
    async fn invalid_registrations_are_rejected() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let first = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "username": "root", "name": "Superuser", "password": "salainen" }))
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::OK);

        let cases = [
            (json!({ "username": "root", "password": "salainen" }), "username must be unique"),
            (json!({ "username": "ro", "password": "salainen" }), "username must be at least 3 characters long"),
            (json!({ "password": "salainen" }), "username missing"),
            (json!({ "username": "another" }), "password missing"),
            (json!({ "username": "another", "password": "sa" }), "password must be at least 3 characters long"),
        ];
        for (payload, message) in cases {
            let req = test::TestRequest::post().uri("/api/users").set_json(payload).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(res).await;
            assert_eq!(body["error"], message);
        }

        assert_eq!(fixture.users.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn unknown_endpoint_is_not_found() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/nothing").to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": "unknown endpoint" }));
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let fixture = Fixture::seeded().await;
        let app = test::init_service(App::new().configure(fixture.routes())).await;

        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/health").to_request()).await;

        assert_eq!(body["status"], "ok");
    }
}
