use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::Post;
use crate::text_utils::format_date;
use crate::view::DISPLAY_DATE_FORMAT;

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    date: &'a str,
    tags: &'a str,
    post_title: &'a str,
    post_content: &'a str,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer> {
        let template = match Template::new(view_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post view template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
        })
    }

    pub fn render(&self, post: &Post) -> String {
        let date = format_date(DISPLAY_DATE_FORMAT, &post.date);
        self.template.render(&ViewItem {
            date: date.as_str(),
            tags: post.tags.as_str(),
            post_title: post.title.as_str(),
            // Rendered at load time, embedded unescaped
            post_content: post.body.as_str(),
        })
    }
}
