use pilist_domain::ListCatalog;

pub fn run(catalog: &ListCatalog) {
    for source in catalog.iter() {
        println!("{:<20} {}", source.key, source.comment);
        println!("{:<20} {}", "", source.url);
        if !source.includes.is_empty() {
            let includes: Vec<&str> = source.includes.iter().map(|k| &**k).collect();
            println!("{:<20} + {}", "", includes.join(", "));
        }
    }
}
