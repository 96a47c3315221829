use std::{env, rc::Rc};

use common::subject_observer::Subject;
use comments::AddedComment;
use log::{info, warn};
use notifiers::{
    gateways::{LogCounterStore, LogMailer},
    EmailAuthor, EmailOtherCommentators, IncrementCommentCount,
};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .unwrap();

    let comment_text = env::args().nth(1).unwrap_or("hello, world".to_string());
    let post_id = 123;

    info!("Created blog post {post_id}");
    info!("Adding observers to subject");
    let mut added_comment = AddedComment::new(comment_text, post_id);
    added_comment
        .attach(Rc::new(IncrementCommentCount::new(LogCounterStore)))
        .attach(Rc::new(EmailOtherCommentators::new(LogMailer)))
        .attach(Rc::new(EmailAuthor::new(LogMailer)));

    info!("Now going to notify them...");
    let summary = added_comment.notify();

    info!("Done: {} observers updated", summary.delivered);
    for failure in &summary.failures {
        warn!("{failure}");
    }
}
