use comfy_table::{Cell, Color, Table};
use literal_shelf::{DisplayBook, Shelf};

use crate::output::format::{create_styled_table, header_cell, styled_cell, truncate};
use crate::utils::format_added;

/// Longest title shown in compact mode
const COMPACT_TITLE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ShelfTableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
}

fn build_header(opts: &ShelfTableOptions) -> Vec<Cell> {
    let c = opts.use_color;
    let mut h = vec![header_cell("Title", c), header_cell("Author", c)];
    if !opts.compact {
        h.extend([header_cell("Added", c), header_cell("Slug", c)]);
    }
    h
}

fn book_row(book: &DisplayBook, opts: &ShelfTableOptions) -> Vec<Cell> {
    let title_color = if opts.use_color { Some(Color::Green) } else { None };
    if opts.compact {
        return vec![
            styled_cell(&truncate(&book.title, COMPACT_TITLE_WIDTH), title_color, false),
            Cell::new(&book.author),
        ];
    }
    vec![
        styled_cell(&book.title, title_color, true),
        Cell::new(&book.author),
        Cell::new(book.date.as_deref().map(format_added).unwrap_or_default()),
        Cell::new(book.slug.as_deref().unwrap_or("")),
    ]
}

fn build_shelf_table(books: &[DisplayBook], opts: &ShelfTableOptions) -> Table {
    let mut table = create_styled_table();
    table.set_header(build_header(opts));
    for book in books {
        table.add_row(book_row(book, opts));
    }
    table
}

/// Print one table per non-empty list, then a summary line
pub(crate) fn print_shelf_tables(shelf: &Shelf, opts: ShelfTableOptions) {
    if shelf.is_empty() {
        println!("No books found.");
        return;
    }

    let sections: [(&str, &[DisplayBook]); 3] = [
        ("Currently Reading", shelf.currently_reading.as_slice()),
        ("Want to Read", shelf.want_to_read.as_slice()),
        ("Finished", shelf.finished.as_slice()),
    ];
    for (title, books) in sections {
        if books.is_empty() {
            continue;
        }
        println!("\n  {title}\n");
        println!("{}", build_shelf_table(books, &opts));
    }

    println!("\n  {}\n", shelf.summary());
}
