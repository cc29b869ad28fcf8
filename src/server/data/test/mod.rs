mod collection;
mod crew;
mod event;
mod member;
