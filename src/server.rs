use std::sync::Arc;
use std::{fs, io};

use ntex::web;
use ntex::web::HttpRequest;
use ntex_files::NamedFile;
use spdlog::{error, info};

use crate::config::Config;
use crate::post_store::{PostStore, StoreError};
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::PostRenderer;
use crate::view::rss_renderer::{build_items, RssChannel};

struct AppState {
    config: Config,
    store: PostStore,
}

fn read_template(config: &Config, file_name: &str) -> io::Result<String> {
    let full_path = config.paths.template_dir.join(file_name);
    fs::read_to_string(full_path)
}

#[web::get("/")]
async fn index(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let posts = match state.store.list() {
        Ok(posts) => posts,
        Err(e) => {
            error!("Error listing posts: {}", e);
            return web::HttpResponse::InternalServerError()
                .body("Error listing posts");
        }
    };

    let rendered = read_template(&state.config, "index.tpl")
        .and_then(|tpl_src| ListRenderer::new(&tpl_src).map(|r| r.render(&posts)));

    match rendered {
        Ok(body) => web::HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Error rendering post list: {}", e);
            web::HttpResponse::InternalServerError()
                .body("Error rendering post list")
        }
    }
}

#[web::get("/post/{post}")]
async fn view(post_name: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let post_name = post_name.into_inner();

    let post = match state.store.get(&post_name) {
        Ok(post) => post,
        Err(StoreError::NotFound) => {
            info!("Post not found: {}", post_name);
            return web::HttpResponse::NotFound().body("Post not found");
        }
        Err(e @ StoreError::Load(_)) => {
            error!("Error loading post {}: {}", post_name, e);
            return web::HttpResponse::InternalServerError()
                .body("Error loading post");
        }
    };

    let rendered = read_template(&state.config, "view.tpl")
        .and_then(|tpl_src| PostRenderer::new(&tpl_src).map(|r| r.render(&post)));

    match rendered {
        Ok(body) => web::HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Error rendering post {}: {}", post_name, e);
            web::HttpResponse::InternalServerError()
                .body("Error rendering post")
        }
    }
}

#[web::get("/feed.xml")]
async fn feed(req: HttpRequest, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let posts = match state.store.list() {
        Ok(posts) => posts,
        Err(e) => {
            error!("Error listing posts for feed: {}", e);
            return web::HttpResponse::InternalServerError()
                .body("Error listing posts");
        }
    };

    // Item links follow whatever host the request came through
    let host = req.headers()
        .get("host")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let base_url = format!("http://{}", host);

    let items = build_items(&posts, &base_url);
    let feed_cfg = &state.config.feed;
    let channel = RssChannel {
        ch_title: &feed_cfg.title,
        ch_link: &feed_cfg.site_url,
        ch_desc: &feed_cfg.description,
        ch_lang: &feed_cfg.language,
    };

    match channel.render(&items) {
        Ok(xml) => web::HttpResponse::Ok()
            .content_type("text/xml; charset=utf-8")
            .header("Content-Disposition", "inline")
            .body(xml),
        Err(e) => {
            error!("Error encoding feed: {}", e);
            web::HttpResponse::InternalServerError()
                .body("Error encoding feed")
        }
    }
}

#[web::get("/public/{file_name}")]
async fn public_files(path: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> Result<NamedFile, web::Error> {
    if path.contains("../") {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    let file_path = state.config.paths.public_dir.join(path.into_inner());
    Ok(NamedFile::open(file_path)?)
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;

    let store = PostStore::new(config.paths.posts_dir.clone());
    let app_state = Arc::new(AppState {
        config,
        store,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(index)
            .service(view)
            .service(feed)
            .service(public_files)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
