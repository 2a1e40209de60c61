// Server-rendered browser form. Pure form logic lives in translation::form.

pub mod page;
