use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::Post;
use crate::text_utils::format_date;
use crate::view::DISPLAY_DATE_FORMAT;

#[derive(ramhorns::Content)]
struct ListPage {
    post_list: Vec<PostItem>,
}

#[derive(ramhorns::Content)]
struct PostItem {
    date: String,
    link: String,
    title: String,
    tags: String,
    draft: bool,
}

/// Renders the index page: every post the store returned, already sorted.
/// Drafts are included and flagged so the template can mark them.
pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
        })
    }

    pub fn render(&self, posts: &[Post]) -> String {
        let mut post_list = vec![];
        for post in posts {
            let post_item = PostItem {
                date: format_date(DISPLAY_DATE_FORMAT, &post.date),
                link: format!("/post/{}", &post.file_name),
                title: post.title.clone(),
                tags: post.tags.clone(),
                draft: post.draft,
            };
            post_list.push(post_item);
        }

        self.template.render(&ListPage {
            post_list,
        })
    }
}
