/// Paragraphs bundled with the binary and used when no corpus file is given.
pub const PARAGRAPHS: &[&str] = &[
    "Cold brew ceramic mug leaning against a reclaimed shelf, the barista \
     argues about single origin beans while a fixed gear bicycle waits \
     outside. Nobody asked for oat milk, yet here it is, frothed and \
     photographed before anyone takes a sip.",
    "Typewriter enthusiasts gather on the rooftop every second Thursday to \
     trade ribbons and complain about the humidity. Someone brought a \
     record player, someone else brought a sourdough starter named after \
     a minor poet, and the evening drifts toward midnight.",
    "Vinyl crates stacked by genre and then by mood, because alphabetical \
     order felt too corporate. The shop cat sleeps on the jazz section and \
     guards it with quiet authority against browsers who only want the \
     famous records.",
    "Handlebar mustache wax sold next to small batch hot sauce, artisanal \
     pickles and a zine about urban beekeeping. The market closes at noon, \
     but the line for the food truck with no name never seems to shrink.",
    "Pour over coffee takes exactly four minutes if you respect the bloom. \
     The kettle has a gooseneck, the scale reads tenths of a gram and the \
     filter was folded by hand while the playlist shuffled into something \
     nobody else has heard of yet.",
    "Flannel shirts hang in the window of a barbershop that also sells \
     houseplants. Succulents line the mirrors, a neon sign hums in the \
     corner and the appointment book is, of course, a paper notebook kept \
     under the register.",
    "Polaroid snapshots pinned to a corkboard tell the story of a summer \
     spent restoring a camper van. Half of them are out of focus, which \
     everyone agrees makes them more authentic than anything a phone could \
     ever capture.",
    "Kombucha brewed in the back room ferments beside jars of foraged \
     mushrooms and a shelf of secondhand paperbacks. The menu is written \
     in chalk, changes daily and is mostly a suggestion about what might be \
     available if you arrive early.",
];
