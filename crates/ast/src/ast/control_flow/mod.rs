pub mod r#for;
pub mod r#if;
pub mod switch;
pub mod r#try;
pub mod r#while;
pub mod with;
