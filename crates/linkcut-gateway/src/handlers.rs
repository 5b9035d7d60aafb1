mod redirect;

pub use redirect::redirect_handler;
