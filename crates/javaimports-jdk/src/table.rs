//! The bundled stdlib table: `(simple name, package, is static member)`.

pub(crate) const STDLIB: &[(&str, &str, bool)] = &[
    // java.util
    ("AbstractMap", "java.util", false),
    ("ArrayDeque", "java.util", false),
    ("ArrayList", "java.util", false),
    ("Arrays", "java.util", false),
    ("BitSet", "java.util", false),
    ("Calendar", "java.util", false),
    ("Collection", "java.util", false),
    ("Collections", "java.util", false),
    ("Comparator", "java.util", false),
    ("Currency", "java.util", false),
    ("Date", "java.util", false),
    ("Deque", "java.util", false),
    ("EnumMap", "java.util", false),
    ("EnumSet", "java.util", false),
    ("HashMap", "java.util", false),
    ("HashSet", "java.util", false),
    ("Hashtable", "java.util", false),
    ("IdentityHashMap", "java.util", false),
    ("Iterator", "java.util", false),
    ("LinkedHashMap", "java.util", false),
    ("LinkedHashSet", "java.util", false),
    ("LinkedList", "java.util", false),
    ("List", "java.util", false),
    ("ListIterator", "java.util", false),
    ("Locale", "java.util", false),
    ("Map", "java.util", false),
    ("NavigableMap", "java.util", false),
    ("NavigableSet", "java.util", false),
    ("NoSuchElementException", "java.util", false),
    ("Objects", "java.util", false),
    ("Optional", "java.util", false),
    ("OptionalDouble", "java.util", false),
    ("OptionalInt", "java.util", false),
    ("OptionalLong", "java.util", false),
    ("PriorityQueue", "java.util", false),
    ("Properties", "java.util", false),
    ("Queue", "java.util", false),
    ("Random", "java.util", false),
    ("Scanner", "java.util", false),
    ("Set", "java.util", false),
    ("SortedMap", "java.util", false),
    ("SortedSet", "java.util", false),
    ("Spliterator", "java.util", false),
    ("StringJoiner", "java.util", false),
    ("StringTokenizer", "java.util", false),
    ("TimeZone", "java.util", false),
    ("Timer", "java.util", false),
    ("TimerTask", "java.util", false),
    ("TreeMap", "java.util", false),
    ("TreeSet", "java.util", false),
    ("UUID", "java.util", false),
    ("Vector", "java.util", false),
    ("WeakHashMap", "java.util", false),
    // java.util.concurrent
    ("BlockingQueue", "java.util.concurrent", false),
    ("Callable", "java.util.concurrent", false),
    ("CompletableFuture", "java.util.concurrent", false),
    ("ConcurrentHashMap", "java.util.concurrent", false),
    ("ConcurrentLinkedQueue", "java.util.concurrent", false),
    ("ConcurrentMap", "java.util.concurrent", false),
    ("CountDownLatch", "java.util.concurrent", false),
    ("ExecutorService", "java.util.concurrent", false),
    ("Executors", "java.util.concurrent", false),
    ("Future", "java.util.concurrent", false),
    ("ScheduledExecutorService", "java.util.concurrent", false),
    ("Semaphore", "java.util.concurrent", false),
    ("ThreadLocalRandom", "java.util.concurrent", false),
    ("TimeUnit", "java.util.concurrent", false),
    ("AtomicBoolean", "java.util.concurrent.atomic", false),
    ("AtomicInteger", "java.util.concurrent.atomic", false),
    ("AtomicLong", "java.util.concurrent.atomic", false),
    ("AtomicReference", "java.util.concurrent.atomic", false),
    ("ReentrantLock", "java.util.concurrent.locks", false),
    // java.util.function
    ("BiConsumer", "java.util.function", false),
    ("BiFunction", "java.util.function", false),
    ("BinaryOperator", "java.util.function", false),
    ("Consumer", "java.util.function", false),
    ("Function", "java.util.function", false),
    ("Predicate", "java.util.function", false),
    ("Supplier", "java.util.function", false),
    ("UnaryOperator", "java.util.function", false),
    // java.util.stream
    ("Collectors", "java.util.stream", false),
    ("DoubleStream", "java.util.stream", false),
    ("IntStream", "java.util.stream", false),
    ("LongStream", "java.util.stream", false),
    ("Stream", "java.util.stream", false),
    // java.util.regex
    ("Matcher", "java.util.regex", false),
    ("Pattern", "java.util.regex", false),
    // java.io
    ("BufferedInputStream", "java.io", false),
    ("BufferedOutputStream", "java.io", false),
    ("BufferedReader", "java.io", false),
    ("BufferedWriter", "java.io", false),
    ("ByteArrayInputStream", "java.io", false),
    ("ByteArrayOutputStream", "java.io", false),
    ("Closeable", "java.io", false),
    ("File", "java.io", false),
    ("FileInputStream", "java.io", false),
    ("FileNotFoundException", "java.io", false),
    ("FileOutputStream", "java.io", false),
    ("FileReader", "java.io", false),
    ("FileWriter", "java.io", false),
    ("IOException", "java.io", false),
    ("InputStream", "java.io", false),
    ("InputStreamReader", "java.io", false),
    ("OutputStream", "java.io", false),
    ("OutputStreamWriter", "java.io", false),
    ("PrintStream", "java.io", false),
    ("PrintWriter", "java.io", false),
    ("Reader", "java.io", false),
    ("Serializable", "java.io", false),
    ("UncheckedIOException", "java.io", false),
    ("Writer", "java.io", false),
    // java.nio
    ("ByteBuffer", "java.nio", false),
    ("CharBuffer", "java.nio", false),
    ("Charset", "java.nio.charset", false),
    ("StandardCharsets", "java.nio.charset", false),
    ("Files", "java.nio.file", false),
    ("Path", "java.nio.file", false),
    ("Paths", "java.nio.file", false),
    ("StandardCopyOption", "java.nio.file", false),
    ("StandardOpenOption", "java.nio.file", false),
    // java.net
    ("InetAddress", "java.net", false),
    ("InetSocketAddress", "java.net", false),
    ("ServerSocket", "java.net", false),
    ("Socket", "java.net", false),
    ("URI", "java.net", false),
    ("URL", "java.net", false),
    ("URLConnection", "java.net", false),
    ("HttpClient", "java.net.http", false),
    ("HttpRequest", "java.net.http", false),
    ("HttpResponse", "java.net.http", false),
    // java.math
    ("BigDecimal", "java.math", false),
    ("BigInteger", "java.math", false),
    ("MathContext", "java.math", false),
    ("RoundingMode", "java.math", false),
    // java.text
    ("DateFormat", "java.text", false),
    ("DecimalFormat", "java.text", false),
    ("MessageFormat", "java.text", false),
    ("NumberFormat", "java.text", false),
    ("ParseException", "java.text", false),
    ("SimpleDateFormat", "java.text", false),
    // java.time
    ("Clock", "java.time", false),
    ("Duration", "java.time", false),
    ("Instant", "java.time", false),
    ("LocalDate", "java.time", false),
    ("LocalDateTime", "java.time", false),
    ("LocalTime", "java.time", false),
    ("OffsetDateTime", "java.time", false),
    ("Period", "java.time", false),
    ("ZoneId", "java.time", false),
    ("ZoneOffset", "java.time", false),
    ("ZonedDateTime", "java.time", false),
    ("ChronoUnit", "java.time.temporal", false),
    ("DateTimeFormatter", "java.time.format", false),
    // java.awt (legacy names that clash with java.util)
    ("Color", "java.awt", false),
    ("Component", "java.awt", false),
    ("Dimension", "java.awt", false),
    ("Graphics", "java.awt", false),
    ("List", "java.awt", false),
    // java.sql (names that clash with java.util/java.time)
    ("Connection", "java.sql", false),
    ("Date", "java.sql", false),
    ("DriverManager", "java.sql", false),
    ("PreparedStatement", "java.sql", false),
    ("ResultSet", "java.sql", false),
    ("SQLException", "java.sql", false),
    ("Statement", "java.sql", false),
    // Common static members
    ("requireNonNull", "java.util.Objects", true),
    ("asList", "java.util.Arrays", true),
    ("emptyList", "java.util.Collections", true),
    ("singletonList", "java.util.Collections", true),
    ("toList", "java.util.stream.Collectors", true),
    ("toMap", "java.util.stream.Collectors", true),
];
