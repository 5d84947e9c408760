//! Built-in master lists used to seed the database

/// (faction, name, hp, is_upgraded, gold_cost); a cost of 0 is unknown
pub type CatalogUnit = (&'static str, &'static str, f64, bool, f64);

pub const UNITS: &[CatalogUnit] = &[
    // Zamek
    ("Zamek", "Pikinier", 10.0, false, 60.0),
    ("Zamek", "Halabardnik", 10.0, true, 75.0),
    ("Zamek", "Łucznik", 10.0, false, 100.0),
    ("Zamek", "Strzelec", 10.0, true, 150.0),
    ("Zamek", "Gryf", 25.0, false, 200.0),
    ("Zamek", "Królewski Gryf", 25.0, true, 240.0),
    ("Zamek", "Szermierz", 35.0, false, 300.0),
    ("Zamek", "Krzyżowiec", 35.0, true, 400.0),
    ("Zamek", "Mnich", 30.0, false, 400.0),
    ("Zamek", "Kapłan", 30.0, true, 450.0),
    ("Zamek", "Kawalerzysta", 100.0, false, 1000.0),
    ("Zamek", "Czempion", 100.0, true, 1200.0),
    ("Zamek", "Anioł", 200.0, false, 3000.0),
    ("Zamek", "Archanioł", 200.0, true, 5000.0),

    // Bastion
    ("Bastion", "Centaur", 8.0, false, 0.0),
    ("Bastion", "Kapitan Centaurów", 10.0, true, 0.0),
    ("Bastion", "Krasnolud", 20.0, false, 0.0),
    ("Bastion", "Krasnoludzki Wojownik", 20.0, true, 0.0),
    ("Bastion", "Leśny Elf", 15.0, false, 0.0),
    ("Bastion", "Wielki Elf", 15.0, true, 0.0),
    ("Bastion", "Pegaz", 30.0, false, 0.0),
    ("Bastion", "Srebrny Pegaz", 30.0, true, 0.0),
    ("Bastion", "Dendroid", 55.0, false, 0.0),
    ("Bastion", "Dendroid Strażnik", 65.0, true, 0.0),
    ("Bastion", "Jednorożec", 90.0, false, 0.0),
    ("Bastion", "Jednorożec Bitewny", 110.0, true, 0.0),
    ("Bastion", "Zielony Smok", 180.0, false, 0.0),
    ("Bastion", "Złoty Smok", 180.0, true, 0.0),

    // Forteca
    ("Forteca", "Gremiln", 4.0, false, 0.0),
    ("Forteca", "Mistrz Gremilnów", 4.0, true, 0.0),
    ("Forteca", "Kamienny Gargulec", 16.0, false, 0.0),
    ("Forteca", "Obsydianowy Gargulec", 16.0, true, 0.0),
    ("Forteca", "Kamienny Golem", 30.0, false, 0.0),
    ("Forteca", "Żelazny Golem", 35.0, true, 0.0),
    ("Forteca", "Mag", 25.0, false, 0.0),
    ("Forteca", "Arcymag", 30.0, true, 0.0),
    ("Forteca", "Dżin", 40.0, false, 0.0),
    ("Forteca", "Mistrz Dżinów", 40.0, true, 0.0),
    ("Forteca", "Naga", 110.0, false, 0.0),
    ("Forteca", "Królewska Naga", 110.0, true, 0.0),
    ("Forteca", "Gigant", 150.0, false, 0.0),
    ("Forteca", "Tytan", 300.0, true, 0.0),

    // Inferno
    ("Inferno", "Imp", 4.0, false, 50.0),
    ("Inferno", "Chochlik", 4.0, true, 60.0),
    ("Inferno", "Gog", 13.0, false, 125.0),
    ("Inferno", "Magog", 13.0, true, 175.0),
    ("Inferno", "Piekielny Ogar", 25.0, false, 200.0),
    ("Inferno", "Cerber", 25.0, true, 250.0),
    ("Inferno", "Demon", 35.0, false, 250.0),
    ("Inferno", "Rogaty Demon", 40.0, true, 270.0),
    ("Inferno", "Diablik", 90.0, false, 500.0),
    ("Inferno", "Arcydiablik", 90.0, true, 700.0),
    ("Inferno", "Efreet", 90.0, false, 900.0),
    ("Inferno", "Sułtański Efreet", 90.0, true, 1100.0),
    ("Inferno", "Diabeł", 160.0, false, 2700.0),
    ("Inferno", "ArcyDiabeł", 160.0, true, 4500.0),

    // Nekropolia
    ("Nekropolia", "Szkielet", 6.0, false, 60.0),
    ("Nekropolia", "Szkielet Wojownik", 6.0, true, 70.0),
    ("Nekropolia", "Zombie", 15.0, false, 100.0),
    ("Nekropolia", "Plugawy Zombie", 20.0, true, 125.0),
    ("Nekropolia", "Upiór", 18.0, false, 200.0),
    ("Nekropolia", "Zjawa", 18.0, true, 230.0),
    ("Nekropolia", "Wampir", 30.0, false, 360.0),
    ("Nekropolia", "Wampirzy Lord", 40.0, true, 500.0),
    ("Nekropolia", "Lisz", 30.0, false, 550.0),
    ("Nekropolia", "Arcylisz", 30.0, true, 600.0),
    ("Nekropolia", "Czarny Rycerz", 120.0, false, 1200.0),
    ("Nekropolia", "Mroczny Rycerz", 120.0, true, 1500.0),
    ("Nekropolia", "Kościany Smok", 150.0, false, 1800.0),
    ("Nekropolia", "Upiorny Smok", 150.0, true, 3000.0),

    // Lochy
    ("Lochy", "Troglodyta", 5.0, false, 0.0),
    ("Lochy", "Piekielny Troglodyta", 6.0, true, 0.0),
    ("Lochy", "Harpia", 14.0, false, 0.0),
    ("Lochy", "Harpia Wiedźma", 14.0, true, 0.0),
    ("Lochy", "Beholder", 22.0, false, 0.0),
    ("Lochy", "Złe Oko", 22.0, true, 0.0),
    ("Lochy", "Meduza", 25.0, false, 0.0),
    ("Lochy", "Meduza Królewska", 30.0, true, 0.0),
    ("Lochy", "Minotaur", 50.0, false, 0.0),
    ("Lochy", "Minotaur Królewski", 50.0, true, 0.0),
    ("Lochy", "Mantikora", 80.0, false, 0.0),
    ("Lochy", "Skorpikora", 80.0, true, 0.0),
    ("Lochy", "Czerwony Smok", 180.0, false, 0.0),
    ("Lochy", "Czarny Smok", 300.0, true, 0.0),

    // Twierdza
    ("Twierdza", "Goblin", 5.0, false, 0.0),
    ("Twierdza", "Hobgoblin", 5.0, true, 0.0),
    ("Twierdza", "Wilczy Jeździec", 10.0, false, 0.0),
    ("Twierdza", "Wilczy Grabieżca", 10.0, true, 0.0),
    ("Twierdza", "Ork", 15.0, false, 0.0),
    ("Twierdza", "Ork Herszt", 20.0, true, 0.0),
    ("Twierdza", "Ogr", 40.0, false, 0.0),
    ("Twierdza", "Ogr Szaman", 60.0, true, 0.0),
    ("Twierdza", "Rok", 60.0, false, 0.0),
    ("Twierdza", "Ptak Gromu", 60.0, true, 0.0),
    ("Twierdza", "Cyklop", 70.0, false, 0.0),
    ("Twierdza", "Król Cyklopów", 70.0, true, 0.0),
    ("Twierdza", "Behemot", 150.0, false, 0.0),
    ("Twierdza", "Pradawny Behemot", 300.0, true, 0.0),

    // Fort
    ("Fort", "Gnol", 6.0, false, 0.0),
    ("Fort", "Gnol Grabieżca", 6.0, true, 0.0),
    ("Fort", "Jaszczuroczłek", 14.0, false, 0.0),
    ("Fort", "Jaszczurzy Wojownik", 15.0, true, 0.0),
    ("Fort", "Ważka", 20.0, false, 0.0),
    ("Fort", "Ognista Ważka", 20.0, true, 0.0),
    ("Fort", "Bazyliszek", 35.0, false, 0.0),
    ("Fort", "Większy Bazyliszek", 35.0, true, 0.0),
    ("Fort", "Gorgona", 70.0, false, 0.0),
    ("Fort", "Potężna Gorgona", 70.0, true, 0.0),
    ("Fort", "Wiwerna", 110.0, false, 0.0),
    ("Fort", "Wiwerna Królewska", 110.0, true, 0.0),
    ("Fort", "Hydra", 80.0, false, 0.0),
    ("Fort", "Hydra Chaosu", 100.0, true, 0.0),

    // Wrota Żywiołów
    ("Wrota Żywiołów", "Wróżka", 3.0, false, 0.0),
    ("Wrota Żywiołów", "Duszek", 3.0, true, 0.0),
    ("Wrota Żywiołów", "Żywiołak Powietrza", 25.0, false, 0.0),
    ("Wrota Żywiołów", "Żywiołak Burzy", 25.0, true, 0.0),
    ("Wrota Żywiołów", "Żywiołak Wody", 30.0, false, 0.0),
    ("Wrota Żywiołów", "Żywiołak Lodu", 30.0, true, 0.0),
    ("Wrota Żywiołów", "Żywiołak Ognia", 35.0, false, 0.0),
    ("Wrota Żywiołów", "Żywiołak Energii", 35.0, true, 0.0),
    ("Wrota Żywiołów", "Żywiołak Ziemi", 40.0, false, 0.0),
    ("Wrota Żywiołów", "Żywiołak Magmy", 40.0, true, 0.0),
    ("Wrota Żywiołów", "Żywiołak Psychiczny", 75.0, false, 0.0),
    ("Wrota Żywiołów", "Żywiołak Magii", 75.0, true, 0.0),
    ("Wrota Żywiołów", "Ognisty Ptak", 150.0, false, 0.0),
    ("Wrota Żywiołów", "Feniks", 200.0, true, 0.0),

    // Przystań
    ("Przystań", "Nimfa", 15.0, false, 0.0),
    ("Przystań", "Okeanida", 16.0, true, 0.0),
    ("Przystań", "Mat", 20.0, false, 0.0),
    ("Przystań", "Bosman", 20.0, true, 0.0),
    ("Przystań", "Pirat", 40.0, false, 0.0),
    ("Przystań", "Korsarz", 40.0, true, 0.0),
    ("Przystań", "Ptak Morski", 45.0, false, 0.0),
    ("Przystań", "Ayssyda", 45.0, true, 0.0),
    ("Przystań", "Wiedźma Morska", 50.0, false, 0.0),
    ("Przystań", "Czarodziejka", 50.0, true, 0.0),
    ("Przystań", "Nix", 100.0, false, 0.0),
    ("Przystań", "Nix Wojownik", 110.0, true, 0.0),
    ("Przystań", "Wąż Morski", 280.0, false, 0.0),
    ("Przystań", "Haspid", 280.0, true, 0.0),

    // Fabryka
    ("Fabryka", "Niziołek (fabryka)", 12.0, false, 0.0),
    ("Fabryka", "Niziołek Grenadier", 12.0, true, 0.0),
    ("Fabryka", "Mechanik", 30.0, false, 0.0),
    ("Fabryka", "Inżynier", 30.0, true, 0.0),
    ("Fabryka", "Pancernik", 45.0, false, 0.0),
    ("Fabryka", "Pancernik Hetman", 45.0, true, 0.0),
    ("Fabryka", "Automat", 120.0, false, 0.0),
    ("Fabryka", "Strażnik Automat", 120.0, true, 0.0),
    ("Fabryka", "Czerw Pustyni", 100.0, false, 0.0),
    ("Fabryka", "Olgoj-chorchoj", 100.0, true, 0.0),
    ("Fabryka", "Rewolwerowiec", 110.0, false, 0.0),
    ("Fabryka", "Łowca Nagród", 110.0, true, 0.0),
    ("Fabryka", "Kuroliszek", 250.0, false, 0.0),
    ("Fabryka", "Karmazynowy Kuroliszek", 250.0, true, 0.0),

    // Neutralne
    ("Neutralne", "Chłop", 1.0, false, 0.0),
    ("Neutralne", "Niziołek", 4.0, false, 0.0),
    ("Neutralne", "Duch", 8.0, false, 0.0),
    ("Neutralne", "Zbir", 10.0, false, 0.0),
    ("Neutralne", "Bandyta", 10.0, false, 0.0),
    ("Neutralne", "Dzik", 15.0, false, 0.0),
    ("Neutralne", "Koczownik", 30.0, false, 0.0),
    ("Neutralne", "Mumia", 30.0, false, 0.0),
    ("Neutralne", "Zaklinacz", 30.0, false, 0.0),
    ("Neutralne", "Troll", 40.0, false, 0.0),
    ("Neutralne", "Rdzawy Smok", 750.0, false, 0.0),
    ("Neutralne", "Kryształowy Smok", 800.0, false, 0.0),
    ("Neutralne", "Czarodziejski Smok", 1000.0, false, 0.0),
    ("Neutralne", "Lazurowy Smok", 1000.0, false, 0.0),
];

/// (name, hp_bonus)
pub const ARTIFACTS: &[(&str, i64)] = &[
    ("Vial of Lifeblood", 1),
    ("Ring of Vitality", 1),
    ("Ring of Life", 1),
];
