//! Reference catalog for the top-100 grid.
//!
//! Order matters: it is the display order whenever the grid has to be built
//! from scratch.

pub const TOP_100_IMDB_IDS: &[&str] = &[
    "tt0111161", // The Shawshank Redemption
    "tt0068646", // The Godfather
    "tt0468569", // The Dark Knight
    "tt0071562", // The Godfather Part II
    "tt0050083", // 12 Angry Men
    "tt0108052", // Schindler's List
    "tt0167260", // The Lord of the Rings: The Return of the King
    "tt0110912", // Pulp Fiction
    "tt0120737", // The Lord of the Rings: The Fellowship of the Ring
    "tt0060196", // The Good, the Bad and the Ugly
    "tt0109830", // Forrest Gump
    "tt0137523", // Fight Club
    "tt0167261", // The Lord of the Rings: The Two Towers
    "tt1375666", // Inception
    "tt0080684", // Star Wars: Episode V - The Empire Strikes Back
    "tt0133093", // The Matrix
    "tt0099685", // Goodfellas
    "tt0073486", // One Flew Over the Cuckoo's Nest
    "tt0114369", // Se7en
    "tt0038650", // It's a Wonderful Life
    "tt0102926", // The Silence of the Lambs
    "tt0076759", // Star Wars
    "tt0120815", // Saving Private Ryan
    "tt0317248", // City of God
    "tt0118799", // Life Is Beautiful
    "tt0245429", // Spirited Away
    "tt0047478", // Seven Samurai
    "tt0120689", // The Green Mile
    "tt0816692", // Interstellar
    "tt0114814", // The Usual Suspects
    "tt0103064", // Terminator 2: Judgment Day
    "tt0088763", // Back to the Future
    "tt0054215", // Psycho
    "tt0110413", // Leon: The Professional
    "tt0034583", // Casablanca
    "tt0027977", // Modern Times
    "tt0120586", // American History X
    "tt0021749", // City Lights
    "tt0253474", // The Pianist
    "tt0407887", // The Departed
    "tt0172495", // Gladiator
    "tt0482571", // The Prestige
    "tt0078788", // Apocalypse Now
    "tt0209144", // Memento
    "tt0078748", // Alien
    "tt0032553", // The Great Dictator
    "tt0043014", // Sunset Blvd.
    "tt0082971", // Raiders of the Lost Ark
    "tt0095327", // Grave of the Fireflies
    "tt0057012", // Dr. Strangelove
];
