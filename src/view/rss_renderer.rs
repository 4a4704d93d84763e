use std::io::Cursor;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::content::Post;
use crate::text_utils::{feed_date, leading_paragraphs};

/* Shape of the document:
<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0">

<channel>
  <title>io.</title>
  <link>http://io.myyc.dev</link>
  <description>io.myyc.dev</description>
  <language>en-gb</language>
  <item>
    <title>A hard look at garbage collection</title>
    <link>http://io.myyc.dev/post/20240305_gc.md</link>
    <description><![CDATA[<p>first two paragraphs</p>]]></description>
    <pubDate>Tue, 5 Mar 2024 09:30:00 +0000</pubDate>
    <guid isPermaLink="false">20240305_gc.md</guid>
  </item>
</channel>

</rss>
*/

/// How many body paragraphs go into an item description.
const DESCRIPTION_PARAGRAPHS: usize = 2;

pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    pub guid: String,
}

/// Projects the post collection into feed items.
///
/// Drafts are dropped here and only here; the index still lists them. The
/// link is absolute, built from the request-time base URL, so the feed works
/// behind whatever host name the server is reached through.
pub fn build_items(posts: &[Post], base_url: &str) -> Vec<FeedItem> {
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);

    posts.iter()
        .filter(|post| !post.draft)
        .map(|post| FeedItem {
            title: post.title.clone(),
            link: format!("{}/post/{}", base_url, post.file_name),
            description: leading_paragraphs(&post.body, DESCRIPTION_PARAGRAPHS),
            pub_date: feed_date(&post.date),
            guid: post.file_name.clone(),
        })
        .collect()
}

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
    pub ch_lang: &'a str,
}

impl RssChannel<'_> {
    pub fn render(&self, items: &[FeedItem]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        // <?xml version="1.0" encoding="UTF-8" ?>
        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        // <rss version="2.0">
        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;

        // <channel>
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;
        push_text(&mut writer, "description", self.ch_desc)?;
        push_text(&mut writer, "language", self.ch_lang)?;

        for item in items {
            // <item>
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", &item.title)?;
            push_text(&mut writer, "link", &item.link)?;
            push_cdata(&mut writer, "description", &item.description)?;
            push_text(&mut writer, "pubDate", &item.pub_date)?;

            // <guid isPermaLink="false">file name</guid>
            let mut guid_elem = BytesStart::new("guid");
            guid_elem.push_attribute(("isPermaLink", "false"));
            writer.write_event(Event::Start(guid_elem))?;
            writer.write_event(Event::Text(BytesText::new(&item.guid)))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            // </item>
            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        // </channel>
        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        // </rss>
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn push_cdata(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    if text.contains("]]>") {
        let new_text = text.replace("]]>", "]] >");
        writer.write_event(Event::CData(BytesCData::new(&new_text)))?;
    } else {
        writer.write_event(Event::CData(BytesCData::new(text)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str;

    use crate::content::Post;

    use super::*;

    fn create_post(id: &str, draft: bool) -> Post {
        Post {
            file_name: format!("post-{}.md", id),
            title: format!("title-of-post-{}", id),
            date: "2024-01-02T05:06:07Z".to_string(),
            tags: "".to_string(),
            draft,
            body: format!("<p>summary-of-post-{}</p>\n<p>more text</p>", id),
        }
    }

    #[test]
    fn test_build_items_skips_drafts() {
        let posts = vec![
            create_post("1", false),
            create_post("2", true),
            create_post("3", false),
        ];
        let items = build_items(&posts, "http://blog.example");
        let guids: Vec<&str> = items.iter().map(|i| i.guid.as_str()).collect();
        assert_eq!(guids, ["post-1.md", "post-3.md"]);
    }

    #[test]
    fn test_build_items_links_and_dates() {
        let posts = vec![create_post("1", false)];
        let items = build_items(&posts, "http://blog.example/");
        assert_eq!(items[0].link, "http://blog.example/post/post-1.md");
        assert_eq!(items[0].pub_date, "Tue, 2 Jan 2024 05:06:07 +0000");
    }

    #[test]
    fn test_build_items_truncates_description() {
        let mut post = create_post("1", false);
        post.body = "<p>one</p>\n<p>two</p>\n<p>three</p>".to_string();
        let items = build_items(&[post], "http://blog.example");
        assert_eq!(items[0].description, "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn test_build_items_unparsable_date_is_empty() {
        let mut post = create_post("1", false);
        post.date = "some day".to_string();
        let items = build_items(&[post], "http://blog.example");
        assert_eq!(items[0].pub_date, "");
    }

    #[test]
    fn test_render_xml() {
        let posts = vec![create_post("1", false), create_post("2", false)];
        let items = build_items(&posts, "http://blog.example");

        let rss = RssChannel {
            ch_title: "my feed",
            ch_link: "http://blog.example",
            ch_desc: "My blog feed",
            ch_lang: "en-gb",
        };
        let xml = rss.render(&items).unwrap();
        assert_eq!(str::from_utf8(&xml).unwrap(), EXPECTED);
    }

    const EXPECTED: &str = r##"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>my feed</title><link>http://blog.example</link><description>My blog feed</description><language>en-gb</language><item><title>title-of-post-1</title><link>http://blog.example/post/post-1.md</link><description><![CDATA[<p>summary-of-post-1</p>
<p>more text</p>]]></description><pubDate>Tue, 2 Jan 2024 05:06:07 +0000</pubDate><guid isPermaLink="false">post-1.md</guid></item><item><title>title-of-post-2</title><link>http://blog.example/post/post-2.md</link><description><![CDATA[<p>summary-of-post-2</p>
<p>more text</p>]]></description><pubDate>Tue, 2 Jan 2024 05:06:07 +0000</pubDate><guid isPermaLink="false">post-2.md</guid></item></channel></rss>"##;
}
